use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::utils::error::{EtlError, Result};

const COMPACT_FORMAT: &str = "%Y%m%d";
const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Inclusive calendar date range. `start <= end` holds for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EtlError::InvalidDateRange {
                start: start.format(DISPLAY_FORMAT).to_string(),
                end: end.format(DISPLAY_FORMAT).to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, both ends included.
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn days(&self) -> impl Iterator<Item = DaySlot> + '_ {
        (0..self.len() as u64).filter_map(move |offset| {
            self.start.checked_add_days(Days::new(offset)).map(DaySlot::new)
        })
    }
}

/// One calendar day of a request batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DaySlot {
    date: NaiveDate,
}

impl DaySlot {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `YYYYMMDD`, the form the provider expects in the `date` parameter.
    pub fn compact(&self) -> String {
        self.date.format(COMPACT_FORMAT).to_string()
    }

    /// `YYYY-MM-DD`, prefixed to every observation line.
    pub fn display(&self) -> String {
        self.date.format(DISPLAY_FORMAT).to_string()
    }

    #[cfg(test)]
    /// Parses the `compact` form back. Only exactly eight ASCII digits are accepted.
    pub fn from_compact(compact: &str) -> Option<Self> {
        if compact.len() != 8 || !compact.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year = compact[0..4].parse().ok()?;
        let month = compact[4..6].parse().ok()?;
        let day = compact[6..8].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Decoded response body for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub slot: DaySlot,
    pub body: String,
}

/// `"<yyyy-mm-dd> hh:mm,<level>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationLine(String);

impl ObservationLine {
    pub fn new(slot: &DaySlot, data_line: &str) -> Self {
        Self(format!("{} {}", slot.display(), data_line))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObservationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// First line of a response, e.g. `5. januar 2017,20303 Aalborg Øst II`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    pub raw: String,
    pub date_text: Option<String>,
    pub station_number: Option<String>,
    pub station_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// The first line already looked like data, so it was kept as data.
    MissingHeader,
    /// The line does not start with an `hh:mm,` time field.
    UnexpectedShape,
    /// The body did not end with a line terminator; the trailing fragment was dropped.
    UnterminatedLine,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::MissingHeader => write!(f, "missing header"),
            AnomalyKind::UnexpectedShape => write!(f, "unexpected line shape"),
            AnomalyKind::UnterminatedLine => write!(f, "unterminated line"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineAnomaly {
    pub date: NaiveDate,
    /// 1-based, counting the header as line 1.
    pub line_number: usize,
    pub text: String,
    pub kind: AnomalyKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDay {
    pub slot: DaySlot,
    pub header: Option<ResponseHeader>,
    pub lines: Vec<ObservationLine>,
    pub anomalies: Vec<LineAnomaly>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayFailure {
    pub date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayOutcome {
    Fetched(RawResponse),
    Failed(DayFailure),
}

/// Everything the extract phase produced.
#[derive(Debug, Clone, Default)]
pub struct FetchBatch {
    pub outcomes: Vec<DayOutcome>,
    pub pauses: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub station: String,
    pub station_name: Option<String>,
    pub days_requested: usize,
    pub days_fetched: usize,
    pub pauses: usize,
    pub output: Vec<ObservationLine>,
    pub anomalies: Vec<LineAnomaly>,
    pub failures: Vec<DayFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub station: String,
    pub station_name: Option<String>,
    pub days_requested: usize,
    pub days_fetched: usize,
    pub lines_written: usize,
    pub pauses: usize,
    pub output_path: String,
    pub failed_days: Vec<DayFailure>,
    pub anomalies: Vec<LineAnomaly>,
}

impl RunReport {
    pub fn new(result: &TransformResult, output_path: String) -> Self {
        Self {
            station: result.station.clone(),
            station_name: result.station_name.clone(),
            days_requested: result.days_requested,
            days_fetched: result.days_fetched,
            lines_written: result.output.len(),
            pauses: result.pauses,
            output_path,
            failed_days: result.failures.clone(),
            anomalies: result.anomalies.clone(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed_days.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_rejects_start_after_end() {
        let err = DateRange::new(date(2017, 1, 6), date(2017, 1, 5)).unwrap_err();
        assert!(matches!(err, EtlError::InvalidDateRange { .. }));
        assert!(err.to_string().contains("2017-01-06"));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(2017, 1, 5), date(2017, 1, 5)).unwrap();
        assert_eq!(range.len(), 1);
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![DaySlot::new(date(2017, 1, 5))]);
    }

    #[test]
    fn test_range_crosses_leap_day() {
        let range = DateRange::new(date(2016, 2, 27), date(2016, 3, 1)).unwrap();
        let days: Vec<String> = range.days().map(|d| d.display()).collect();
        assert_eq!(
            days,
            vec!["2016-02-27", "2016-02-28", "2016-02-29", "2016-03-01"]
        );
    }

    #[test]
    fn test_slot_formats() {
        let slot = DaySlot::new(date(2017, 1, 5));
        assert_eq!(slot.compact(), "20170105");
        assert_eq!(slot.display(), "2017-01-05");
        assert_eq!(slot.to_string(), "2017-01-05");
    }

    #[test]
    fn test_compact_round_trip() {
        let range = DateRange::new(date(1999, 12, 25), date(2000, 3, 5)).unwrap();
        for slot in range.days() {
            assert_eq!(DaySlot::from_compact(&slot.compact()), Some(slot));
        }
    }

    #[test]
    fn test_from_compact_rejects_malformed() {
        assert_eq!(DaySlot::from_compact("2017-01-05"), None);
        assert_eq!(DaySlot::from_compact("2017015"), None);
        assert_eq!(DaySlot::from_compact("20170230"), None);
        assert_eq!(DaySlot::from_compact("+0170105"), None);
    }

    #[test]
    fn test_observation_line() {
        let slot = DaySlot::new(date(2017, 1, 5));
        let line = ObservationLine::new(&slot, "00:20,61");
        assert_eq!(line.as_str(), "2017-01-05 00:20,61");
    }
}
