//! Turns one day's response body into observation lines.
//!
//! The provider answers with a header line followed by `hh:mm,level` rows,
//! each terminated by `\r\n`:
//!
//! ```text
//! 5. januar 2017,20303 Aalborg Øst II
//! 00:00,60
//! 00:20,61
//! ```
//!
//! Rows that do not start with a time field are reported as anomalies and
//! left out of the output instead of being rewritten.

use crate::domain::model::{
    AnomalyKind, LineAnomaly, NormalizedDay, ObservationLine, RawResponse, ResponseHeader,
};
use regex::Regex;
use std::sync::LazyLock;

pub const LINE_TERMINATOR: &str = "\r\n";

static DATA_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2},").expect("data line pattern is valid"));

pub fn is_data_line(line: &str) -> bool {
    DATA_LINE.is_match(line)
}

/// Splits `"5. januar 2017,20303 Aalborg Øst II"` into its date text,
/// station number and station name. Parts that are missing stay `None`.
pub fn parse_header(line: &str) -> ResponseHeader {
    let (date_text, station_text) = match line.split_once(',') {
        Some((date, station)) => (Some(date.trim()), Some(station.trim())),
        None => (None, None),
    };

    let (station_number, station_name) = match station_text {
        Some(text) => match text.split_once(char::is_whitespace) {
            Some((number, name)) if number.chars().all(|c| c.is_ascii_digit()) => {
                (Some(number), Some(name.trim()))
            }
            _ if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) => {
                (Some(text), None)
            }
            _ => (None, Some(text)),
        },
        None => (None, None),
    };

    let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);

    ResponseHeader {
        raw: line.to_string(),
        date_text: non_empty(date_text),
        station_number: non_empty(station_number),
        station_name: non_empty(station_name),
    }
}

pub fn normalize(response: &RawResponse) -> NormalizedDay {
    let slot = response.slot;
    let mut day = NormalizedDay {
        slot,
        header: None,
        lines: Vec::new(),
        anomalies: Vec::new(),
    };

    if response.body.is_empty() {
        return day;
    }

    let mut segments: Vec<&str> = response.body.split(LINE_TERMINATOR).collect();

    // split always yields at least one segment; the last one is whatever
    // followed the final terminator
    if let Some(trailing) = segments.pop() {
        if !trailing.is_empty() {
            day.anomalies.push(LineAnomaly {
                date: slot.date(),
                line_number: segments.len() + 1,
                text: trailing.to_string(),
                kind: AnomalyKind::UnterminatedLine,
            });
        }
    }

    let mut first_data = 0;
    match segments.first() {
        Some(first) if is_data_line(first) => {
            day.anomalies.push(LineAnomaly {
                date: slot.date(),
                line_number: 1,
                text: first.to_string(),
                kind: AnomalyKind::MissingHeader,
            });
        }
        Some(first) => {
            day.header = Some(parse_header(first));
            first_data = 1;
        }
        None => {}
    }

    for (index, line) in segments.iter().enumerate().skip(first_data) {
        if is_data_line(line) {
            day.lines.push(ObservationLine::new(&slot, line));
        } else {
            day.anomalies.push(LineAnomaly {
                date: slot.date(),
                line_number: index + 1,
                text: line.to_string(),
                kind: AnomalyKind::UnexpectedShape,
            });
        }
    }

    // the unterminated fragment sits at the end of the body
    day.anomalies.sort_by_key(|a| a.line_number);
    day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DaySlot;
    use chrono::NaiveDate;

    fn response(body: &str) -> RawResponse {
        RawResponse {
            slot: DaySlot::new(NaiveDate::from_ymd_opt(2017, 1, 5).unwrap()),
            body: body.to_string(),
        }
    }

    fn lines(day: &NormalizedDay) -> Vec<&str> {
        day.lines.iter().map(ObservationLine::as_str).collect()
    }

    #[test]
    fn test_normalize_reference_response() {
        let day = normalize(&response(
            "5. januar 2017,20303 Aalborg Øst II\r\n00:00,60\r\n00:20,61\r\n",
        ));

        assert_eq!(lines(&day), vec!["2017-01-05 00:00,60", "2017-01-05 00:20,61"]);
        assert!(day.anomalies.is_empty());

        let header = day.header.unwrap();
        assert_eq!(header.date_text.as_deref(), Some("5. januar 2017"));
        assert_eq!(header.station_number.as_deref(), Some("20303"));
        assert_eq!(header.station_name.as_deref(), Some("Aalborg Øst II"));
    }

    #[test]
    fn test_header_only_yields_empty_day() {
        let day = normalize(&response("5. januar 2017,20303 Aalborg Øst II\r\n"));
        assert!(day.lines.is_empty());
        assert!(day.anomalies.is_empty());
        assert!(day.header.is_some());
    }

    #[test]
    fn test_empty_body_yields_empty_day() {
        let day = normalize(&response(""));
        assert!(day.lines.is_empty());
        assert!(day.anomalies.is_empty());
        assert!(day.header.is_none());
    }

    #[test]
    fn test_negative_levels_pass_through() {
        let day = normalize(&response("hdr\r\n23:40,-12\r\n23:50,-7\r\n"));
        assert_eq!(lines(&day), vec!["2017-01-05 23:40,-12", "2017-01-05 23:50,-7"]);
    }

    #[test]
    fn test_unexpected_line_is_reported_not_rewritten() {
        let day = normalize(&response(
            "hdr\r\n00:00,60\r\nmaalerfejl\r\n\r\n00:20,61\r\n",
        ));

        assert_eq!(lines(&day), vec!["2017-01-05 00:00,60", "2017-01-05 00:20,61"]);
        assert_eq!(day.anomalies.len(), 2);
        assert_eq!(day.anomalies[0].line_number, 3);
        assert_eq!(day.anomalies[0].text, "maalerfejl");
        assert_eq!(day.anomalies[0].kind, AnomalyKind::UnexpectedShape);
        assert_eq!(day.anomalies[1].line_number, 4);
        assert_eq!(day.anomalies[1].text, "");
    }

    #[test]
    fn test_time_field_not_at_line_start_is_an_anomaly() {
        let day = normalize(&response("hdr\r\nkl. 00:00,60\r\n"));
        assert!(day.lines.is_empty());
        assert_eq!(day.anomalies[0].kind, AnomalyKind::UnexpectedShape);
        assert_eq!(day.anomalies[0].text, "kl. 00:00,60");
    }

    #[test]
    fn test_unterminated_fragment_is_reported() {
        let day = normalize(&response("hdr\r\n00:00,60\r\n00:20,6"));

        assert_eq!(lines(&day), vec!["2017-01-05 00:00,60"]);
        assert_eq!(day.anomalies.len(), 1);
        assert_eq!(day.anomalies[0].kind, AnomalyKind::UnterminatedLine);
        assert_eq!(day.anomalies[0].line_number, 3);
        assert_eq!(day.anomalies[0].text, "00:20,6");
    }

    #[test]
    fn test_missing_header_keeps_first_row() {
        let day = normalize(&response("00:00,60\r\n00:20,61\r\n"));

        assert_eq!(lines(&day), vec!["2017-01-05 00:00,60", "2017-01-05 00:20,61"]);
        assert!(day.header.is_none());
        assert_eq!(day.anomalies.len(), 1);
        assert_eq!(day.anomalies[0].kind, AnomalyKind::MissingHeader);
    }

    #[test]
    fn test_bare_lf_is_not_a_terminator() {
        let day = normalize(&response("hdr\n00:00,60\n"));
        assert!(day.lines.is_empty());
        assert_eq!(day.anomalies[0].kind, AnomalyKind::UnterminatedLine);
    }

    #[test]
    fn test_parse_header_variants() {
        let header = parse_header("1. marts 2020,30336");
        assert_eq!(header.station_number.as_deref(), Some("30336"));
        assert!(header.station_name.is_none());

        let header = parse_header("uden komma");
        assert!(header.date_text.is_none());
        assert!(header.station_number.is_none());
        assert_eq!(header.raw, "uden komma");

        let header = parse_header("1. marts 2020,Drogden Fyr");
        assert!(header.station_number.is_none());
        assert_eq!(header.station_name.as_deref(), Some("Drogden Fyr"));
    }

    #[test]
    fn test_is_data_line() {
        assert!(is_data_line("00:00,60"));
        assert!(is_data_line("23:59,"));
        assert!(!is_data_line("0:00,60"));
        assert!(!is_data_line("00:00"));
        assert!(!is_data_line(""));
    }
}
