use crate::domain::model::{DateRange, DaySlot};
use crate::utils::error::{EtlError, Result};
use chrono::NaiveDate;

/// Input format for dates on the command line.
pub const CLI_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a `dd-mm-yyyy` command line date. Unpadded day and month
/// (`5-1-2017`) are accepted.
pub fn parse_cli_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), CLI_DATE_FORMAT).map_err(|e| EtlError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("{} (expected dd-mm-yyyy)", e),
    })
}

pub fn resolve_range(start: NaiveDate, end: NaiveDate) -> Result<DateRange> {
    DateRange::new(start, end)
}

/// Every day from start to end, in order, both ends included.
pub fn expand(range: &DateRange) -> Vec<DaySlot> {
    let slots: Vec<DaySlot> = range.days().collect();
    tracing::debug!(
        "Expanded {} .. {} into {} days",
        range.start(),
        range.end(),
        slots.len()
    );
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_cli_date() {
        assert_eq!(parse_cli_date("start_date", "05-01-2017").unwrap(), date(2017, 1, 5));
        assert_eq!(parse_cli_date("start_date", "5-1-2017").unwrap(), date(2017, 1, 5));
        assert_eq!(parse_cli_date("end_date", "29-02-2016").unwrap(), date(2016, 2, 29));
    }

    #[test]
    fn test_parse_cli_date_rejects_malformed_input() {
        for bad in ["", "2017-01-05", "05/01/2017", "aa-01-2017", "32-01-2017", "05-13-2017", "29-02-2017", "05-01-2017x"] {
            let err = parse_cli_date("start_date", bad).unwrap_err();
            assert!(
                matches!(&err, EtlError::InvalidDate { field, .. } if field == "start_date"),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_expand_count_and_endpoints() {
        let cases = [
            (date(2017, 1, 5), date(2017, 1, 5)),
            (date(2017, 1, 1), date(2017, 1, 31)),
            (date(2018, 1, 1), date(2019, 1, 1)),
            (date(2015, 12, 30), date(2016, 3, 2)),
        ];

        for (start, end) in cases {
            let slots = expand(&resolve_range(start, end).unwrap());
            assert_eq!(slots.len() as i64, (end - start).num_days() + 1);
            assert_eq!(slots.first().unwrap().date(), start);
            assert_eq!(slots.last().unwrap().date(), end);
            assert!(slots.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_full_year_has_366_slots_across_new_year() {
        let slots = expand(&resolve_range(date(2018, 1, 1), date(2019, 1, 1)).unwrap());
        assert_eq!(slots.len(), 366);
        assert_eq!(slots[365].compact(), "20190101");
    }
}
