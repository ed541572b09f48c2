//! Lenient CSV loader for the unified record table.
//!
//! Rows are never rejected for data-quality reasons: unparseable dates and
//! numbers become absent values, and only a missing `record_type` column (a
//! malformed file, not a malformed row) fails the load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use records_spi::{Record, RecordError, RecordType, Result};
use tracing::debug;

use crate::table::RecordTable;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Load the record table from a CSV file.
pub fn load_csv_path<P: AsRef<Path>>(path: P) -> Result<RecordTable> {
    let file = File::open(path.as_ref())?;
    load_csv_reader(BufReader::new(file))
}

/// Load the record table from any CSV reader.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<RecordTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let columns = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        match columns.parse_row(&row) {
            Some(record) => records.push(record),
            None => debug!(row = ?row.position(), "skipping row with unknown record_type"),
        }
    }

    debug!(count = records.len(), "loaded record table");
    Ok(RecordTable::new(records))
}

/// Header-name to column-index mapping.
struct Columns {
    record_id: Option<usize>,
    record_type: usize,
    observation_date: Option<usize>,
    indicator_code: Option<usize>,
    gender: Option<usize>,
    value_numeric: Option<usize>,
    period_start: Option<usize>,
    period_end: Option<usize>,
    indicator: Option<usize>,
    parent_id: Option<usize>,
    related_indicator: Option<usize>,
    impact_magnitude: Option<usize>,
    impact_direction: Option<usize>,
    lag_months: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let record_type = find("record_type").ok_or_else(|| RecordError::MissingColumn {
            name: "record_type".to_string(),
        })?;

        Ok(Self {
            record_id: find("record_id"),
            record_type,
            observation_date: find("observation_date"),
            indicator_code: find("indicator_code"),
            gender: find("gender"),
            value_numeric: find("value_numeric"),
            period_start: find("period_start"),
            period_end: find("period_end"),
            indicator: find("indicator"),
            parent_id: find("parent_id"),
            related_indicator: find("related_indicator"),
            impact_magnitude: find("impact_magnitude"),
            impact_direction: find("impact_direction"),
            lag_months: find("lag_months"),
        })
    }

    /// Parse one row. Returns `None` only when the record_type tag is
    /// unknown; every other field defaults to absent.
    fn parse_row(&self, row: &csv::StringRecord) -> Option<Record> {
        let record_type = RecordType::parse(row.get(self.record_type)?)?;

        let text = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let mut record = Record::new(
            text(self.record_id).unwrap_or_default().as_str(),
            record_type,
        );
        record.observation_date = text(self.observation_date).and_then(|s| parse_date(&s));
        record.indicator_code = text(self.indicator_code);
        record.gender = text(self.gender);
        record.value_numeric = text(self.value_numeric).and_then(|s| s.parse::<f64>().ok());
        record.period_start = text(self.period_start).and_then(|s| parse_date(&s));
        record.period_end = text(self.period_end).and_then(|s| parse_date(&s));
        record.indicator = text(self.indicator);
        record.parent_id = text(self.parent_id);
        record.related_indicator = text(self.related_indicator);
        record.impact_magnitude = text(self.impact_magnitude);
        record.impact_direction = text(self.impact_direction);
        record.lag_months = text(self.lag_months);

        Some(record)
    }
}

/// Parse a date from the formats the unified table is known to carry.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "record_id,record_type,observation_date,indicator_code,gender,value_numeric,period_start,period_end,indicator,parent_id,related_indicator,impact_magnitude,impact_direction,lag_months";

    fn load(rows: &[&str]) -> RecordTable {
        let csv = format!("{}\n{}", HEADER, rows.join("\n"));
        load_csv_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_load_observation_row() {
        let table = load(&["o1,observation,2021-06-15,ACC_OWNERSHIP,all,46.0,,,,,,,,"]);
        assert_eq!(table.len(), 1);
        let rec = &table.records()[0];
        assert_eq!(rec.record_type, RecordType::Observation);
        assert_eq!(rec.indicator_code.as_deref(), Some("ACC_OWNERSHIP"));
        assert_eq!(rec.value_numeric, Some(46.0));
        assert_eq!(rec.year(), Some(2021));
    }

    #[test]
    fn test_load_impact_link_row() {
        let table = load(&["l1,impact_link,,,,,,,,ev1,ACC_OWNERSHIP,high,increase,12"]);
        let rec = &table.records()[0];
        assert_eq!(rec.record_type, RecordType::ImpactLink);
        assert_eq!(rec.parent_id.as_deref(), Some("ev1"));
        assert_eq!(rec.impact_magnitude.as_deref(), Some("high"));
        assert_eq!(rec.lag_months.as_deref(), Some("12"));
    }

    #[test]
    fn test_malformed_fields_become_absent() {
        let table = load(&["o1,observation,not-a-date,ACC_OWNERSHIP,all,not-a-number,,,,,,,,"]);
        let rec = &table.records()[0];
        assert!(rec.observation_date.is_none());
        assert!(rec.value_numeric.is_none());
    }

    #[test]
    fn test_unknown_record_type_skipped() {
        let table = load(&[
            "o1,observation,2021-06-15,ACC_OWNERSHIP,all,46.0,,,,,,,,",
            "x1,mystery,,,,,,,,,,,,",
        ]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_record_type_column_fails() {
        let csv = "record_id,indicator_code\no1,ACC_OWNERSHIP";
        let err = load_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RecordError::MissingColumn { ref name } if name == "record_type"));
    }

    #[test]
    fn test_columns_may_be_missing_entirely() {
        let csv = "record_id,record_type\no1,observation";
        let table = load_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.records()[0].indicator_code.is_none());
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2021-06-15"), NaiveDate::from_ymd_opt(2021, 6, 15));
        assert_eq!(parse_date("2021/06/15"), NaiveDate::from_ymd_opt(2021, 6, 15));
        assert_eq!(
            parse_date("2021-06-15T00:00:00"),
            NaiveDate::from_ymd_opt(2021, 6, 15)
        );
        assert_eq!(
            parse_date("2021-06-15 12:30:00"),
            NaiveDate::from_ymd_opt(2021, 6, 15)
        );
        assert_eq!(parse_date("June 2021"), None);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let table = load(&["o1,observation,,,,,,,,,,,,"]);
        let rec = &table.records()[0];
        assert!(rec.gender.is_none());
        assert!(rec.indicator_code.is_none());
    }
}
