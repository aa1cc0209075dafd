//! Water level stations served by the DMI vandstand servlet.
//!
//! Several locations are published under two station numbers; both are
//! listed. The table only labels log output. Station ids that are missing
//! here are still requested.

/// Metadata for one station.
#[derive(Debug)]
pub struct Station {
    /// Every station number the provider accepts for this location.
    pub numbers: &'static [&'static str],
    pub name: &'static str,
    /// Who operates the gauge.
    pub authority: &'static str,
}

pub static STATION_REGISTRY: &[Station] = &[
    Station {
        numbers: &["20002"],
        name: "Skagen Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["20003"],
        name: "Skagen Havn",
        authority: "Skagen Havn",
    },
    Station {
        numbers: &["20043", "20047"],
        name: "Hirtshals Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["20049"],
        name: "Hirtshals Havn",
        authority: "Hirtshals Havn",
    },
    Station {
        numbers: &["20101", "20102"],
        name: "Frederikshavn Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["20252", "20253"],
        name: "Hals Barre Fyr",
        authority: "Aalborg Havn",
    },
    Station {
        numbers: &["20262"],
        name: "Hals Havn",
        authority: "Aalborg Havn",
    },
    Station {
        numbers: &["20299", "20301"],
        name: "Grønlandshavnen",
        authority: "Aalborg Havn",
    },
    Station {
        numbers: &["20302", "20303"],
        name: "Aalborg Øst",
        authority: "Aalborg Havn",
    },
    Station {
        numbers: &["20333"],
        name: "Haverslev Havn",
        authority: "Skive Kommune",
    },
    Station {
        numbers: &["20412"],
        name: "Rønbjerg Huse Havn",
        authority: "Vesthimmerland Kommune",
    },
    Station {
        numbers: &["20423"],
        name: "Løgstør Havn",
        authority: "Løgstør Havn",
    },
    Station {
        numbers: &["20566", "20567"],
        name: "Hobro Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["20676"],
        name: "Als Odde",
        authority: "Mariagerfjord Kommune",
    },
    Station {
        numbers: &["21009", "21011"],
        name: "Hanstholm Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["21058"],
        name: "Thisted Havn",
        authority: "Thisted Havn",
    },
    Station {
        numbers: &["21138"],
        name: "Nykøbing Mors Havn",
        authority: "Nykøbing Mors Havn",
    },
    Station {
        numbers: &["21191"],
        name: "Skive Havn",
        authority: "Skive Havn",
    },
    Station {
        numbers: &["22009"],
        name: "Udbyhøj Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["22058", "22059"],
        name: "Randers Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["22121", "22122"],
        name: "Grenå Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["22331", "22333"],
        name: "Århus Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["22598", "22599"],
        name: "Hov Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["23126"],
        name: "Horsens Havn S",
        authority: "Horsens Vand",
    },
    Station {
        numbers: &["23128"],
        name: "Horsens Havn N",
        authority: "Horsens Havn",
    },
    Station {
        numbers: &["23132"],
        name: "Juelsminde Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["23259"],
        name: "Vejle Havn",
        authority: "Vejle Havn",
    },
    Station {
        numbers: &["23289", "23293"],
        name: "Fredericia Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["23322"],
        name: "Kolding Havn",
        authority: "Kolding Havn",
    },
    Station {
        numbers: &["24006"],
        name: "Thyborøn Kyst",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24007"],
        name: "Thyborøn Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24018"],
        name: "Ferring",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24032"],
        name: "Lemvig Havn",
        authority: "Lemvig Havn",
    },
    Station {
        numbers: &["24053"],
        name: "Struer",
        authority: "Struer Kommune",
    },
    Station {
        numbers: &["24122", "24125"],
        name: "Thorsminde Kyst",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24123"],
        name: "Thorsminde Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24124"],
        name: "Thorsminde Fjord",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24132"],
        name: "Felsted Kog/Klosterhul",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24328"],
        name: "Ringkøbing Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24342"],
        name: "Hvide Sande Kyst",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24343"],
        name: "Hvide Sande Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24344"],
        name: "Hvide Sande Fjord",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["24353"],
        name: "Bork Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["25137"],
        name: "Grådyb Barre",
        authority: "Esbjerg Havn",
    },
    Station {
        numbers: &["25147"],
        name: "Esbjerg Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["25149"],
        name: "Esbjerg Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["25343", "25344"],
        name: "Ribe Kammersluse",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["25346", "25347"],
        name: "Mandø",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["26088", "26089"],
        name: "Haderslev Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["26136", "26137"],
        name: "Havneby Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["26143", "26144"],
        name: "Brøns Sluse",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["26239"],
        name: "Åbenrå Havn",
        authority: "Åbenrå Havn",
    },
    Station {
        numbers: &["26346"],
        name: "Ballum Sluse",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["26359"],
        name: "Vidåslusen/Højer",
        authority: "DMI",
    },
    Station {
        numbers: &["26361"],
        name: "Vidåslusen/Højer",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["26457", "26459"],
        name: "Fynshav Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["26473", "26474"],
        name: "Sønderborg Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["27000"],
        name: "Svendborg",
        authority: "Svendborg Havn",
    },
    Station {
        numbers: &["27014"],
        name: "Vesterø Havn",
        authority: "Vesterø Havn",
    },
    Station {
        numbers: &["27084"],
        name: "Ballen Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["28003", "28004"],
        name: "Bogense Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["28068"],
        name: "Odense Fjord",
        authority: "Odense Havn",
    },
    Station {
        numbers: &["28086"],
        name: "Odense Kanal Stige Ø",
        authority: "Beredskab Fyn",
    },
    Station {
        numbers: &["28087"],
        name: "Odense Fjord Stige Ø",
        authority: "Beredskab Fyn",
    },
    Station {
        numbers: &["28198", "28199"],
        name: "Kerteminde Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["28234"],
        name: "Slipshavn",
        authority: "DMI",
    },
    Station {
        numbers: &["28366", "28367"],
        name: "Assens Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["28397", "28398"],
        name: "Fåborg Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["28548"],
        name: "Bagenkop Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["29002"],
        name: "Havnebyen/Sjællands Odde",
        authority: "DMI",
    },
    Station {
        numbers: &["29006"],
        name: "Rørvig Havn",
        authority: "Odsherred Havne",
    },
    Station {
        numbers: &["29014"],
        name: "Nykøbing Sjælland Havn",
        authority: "Odsherred Havne",
    },
    Station {
        numbers: &["29038", "29039"],
        name: "Holbæk Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["29141"],
        name: "Kalundborg Havn",
        authority: "Kalundborg Havn",
    },
    Station {
        numbers: &["29393", "29394"],
        name: "Korsør Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["30017"],
        name: "Hornbæk Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["30042"],
        name: "Sletten Havn",
        authority: "Fredensborg Forsyning",
    },
    Station {
        numbers: &["30106"],
        name: "Frederiksværk Havn",
        authority: "Frederiksværk Kommune",
    },
    Station {
        numbers: &["30112"],
        name: "Hundested Havn",
        authority: "Halsnæs Forsyning",
    },
    Station {
        numbers: &["30119"],
        name: "Jægerspris Kignæs Havn",
        authority: "Frederikssund Kommune",
    },
    Station {
        numbers: &["30121"],
        name: "Kyndbyværket",
        authority: "Halsnæs Forsyning",
    },
    Station {
        numbers: &["30129"],
        name: "Frederikssund S",
        authority: "Frederikssund Forsyning",
    },
    Station {
        numbers: &["30202", "30203"],
        name: "Vedbæk Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["30336"],
        name: "Københavns Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["30357"],
        name: "Drogden Fyr",
        authority: "DMI",
    },
    Station {
        numbers: &["30361", "30363"],
        name: "Dragør Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["30396"],
        name: "Hundige Havn",
        authority: "Klar Forsyning",
    },
    Station {
        numbers: &["30407", "30409"],
        name: "Roskilde Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["30478", "30479"],
        name: "Køge Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["31063"],
        name: "Rødvig Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["31171", "31172"],
        name: "Karrebæksminde",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["31243", "31244"],
        name: "Kalvehave",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["31342", "31343"],
        name: "Bandholm Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["31417", "31418"],
        name: "Nakskov",
        authority: "Lolland Kommune",
    },
    Station {
        numbers: &["31463"],
        name: "Sakskøbing Havn",
        authority: "Guldborgsund Kommune",
    },
    Station {
        numbers: &["31473"],
        name: "Guldborgsundtunnel Falster",
        authority: "Guldborgsund Kommune",
    },
    Station {
        numbers: &["31478"],
        name: "Guldborgsundtunnel Lolland",
        authority: "Guldborgsund Kommune",
    },
    Station {
        numbers: &["31493", "31494"],
        name: "Hesnæs Havn",
        authority: "Kystdirektoratet",
    },
    Station {
        numbers: &["31573"],
        name: "Rødbyhavns Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["31616"],
        name: "Gedser Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["32048"],
        name: "Tejn Havn",
        authority: "DMI",
    },
    Station {
        numbers: &["32096", "32098"],
        name: "Rønne Havn",
        authority: "Kystdirektoratet",
    },
];

pub fn find_station(number: &str) -> Option<&'static Station> {
    STATION_REGISTRY
        .iter()
        .find(|station| station.numbers.contains(&number))
}

/// `"20303 (Aalborg Øst, Aalborg Havn)"`, or just the id for unknown stations.
pub fn station_label(number: &str) -> String {
    match find_station(number) {
        Some(station) => format!("{} ({}, {})", number, station.name, station.authority),
        None => number.to_string(),
    }
}
