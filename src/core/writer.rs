use crate::domain::model::{NormalizedDay, ObservationLine};

pub fn output_file_name(station: &str) -> String {
    format!("water_level_{}.txt", station)
}

/// Concatenates the days in the order given, keeping line order within each day.
pub fn flatten(days: Vec<NormalizedDay>) -> Vec<ObservationLine> {
    days.into_iter().flat_map(|day| day.lines).collect()
}

/// One observation per line, each followed by a single `\n`. An empty
/// sequence renders as an empty file.
pub fn render(lines: &[ObservationLine]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_str().len() + 1).sum());
    for line in lines {
        out.push_str(line.as_str());
        out.push('\n');
    }
    out
}
