//! CSV export of the normalized record table.

use std::io::Write;

use chrono::NaiveDate;
use records_spi::{Record, Result};

use crate::table::RecordTable;

const COLUMNS: [&str; 14] = [
    "record_id",
    "record_type",
    "observation_date",
    "indicator_code",
    "gender",
    "value_numeric",
    "period_start",
    "period_end",
    "indicator",
    "parent_id",
    "related_indicator",
    "impact_magnitude",
    "impact_direction",
    "lag_months",
];

/// Write the full normalized table as delimited text. Pass-through only;
/// values are emitted exactly as normalized at load time.
pub fn write_csv<W: Write>(table: &RecordTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(COLUMNS)?;
    for record in table.records() {
        csv_writer.write_record(row_fields(record))?;
    }
    csv_writer.flush().map_err(records_spi::RecordError::Io)?;
    Ok(())
}

fn row_fields(rec: &Record) -> [String; 14] {
    [
        rec.record_id.clone(),
        rec.record_type.as_str().to_string(),
        date_field(rec.observation_date),
        opt_field(rec.indicator_code.as_deref()),
        opt_field(rec.gender.as_deref()),
        rec.value_numeric.map(|v| v.to_string()).unwrap_or_default(),
        date_field(rec.period_start),
        date_field(rec.period_end),
        opt_field(rec.indicator.as_deref()),
        opt_field(rec.parent_id.as_deref()),
        opt_field(rec.related_indicator.as_deref()),
        opt_field(rec.impact_magnitude.as_deref()),
        opt_field(rec.impact_direction.as_deref()),
        opt_field(rec.lag_months.as_deref()),
    ]
}

fn date_field(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn opt_field(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_csv_reader;
    use records_spi::RecordType;

    #[test]
    fn test_export_round_trip() {
        let input = "record_id,record_type,observation_date,indicator_code,gender,value_numeric,period_start,period_end,indicator,parent_id,related_indicator,impact_magnitude,impact_direction,lag_months\n\
                     o1,observation,2021-06-15,ACC_OWNERSHIP,all,46.0,,,,,,,,\n\
                     l1,impact_link,,,,,,,,ev1,ACC_OWNERSHIP,high,increase,12";
        let table = load_csv_reader(input.as_bytes()).unwrap();

        let mut out = Vec::new();
        write_csv(&table, &mut out).unwrap();

        let reloaded = load_csv_reader(out.as_slice()).unwrap();
        assert_eq!(reloaded.len(), table.len());
        assert_eq!(reloaded.records()[0].record_type, RecordType::Observation);
        assert_eq!(reloaded.records()[0].value_numeric, Some(46.0));
        assert_eq!(reloaded.records()[1].parent_id.as_deref(), Some("ev1"));
    }

    #[test]
    fn test_export_has_header_row() {
        let table = RecordTable::default();
        let mut out = Vec::new();
        write_csv(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("record_id,record_type,observation_date"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_absent_values_export_as_empty_fields() {
        let table = RecordTable::new(vec![Record::new("ev1", RecordType::Event)]);
        let mut out = Vec::new();
        write_csv(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let data_line = text.lines().nth(1).unwrap();
        assert!(data_line.starts_with("ev1,event,,"));
    }
}
