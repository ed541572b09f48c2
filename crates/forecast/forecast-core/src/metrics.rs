//! Point-in-time metrics over an indicator/gender slice.
//!
//! An empty slice is a normal condition, not an error; every function here
//! returns `None` for it.

use records_core::RecordTable;

/// Latest observed value for an indicator, optionally narrowed to one gender
/// slice.
pub fn latest_value(table: &RecordTable, code: &str, gender: Option<&str>) -> Option<f64> {
    table.series_for(code, gender).last().map(|&(_, value)| value)
}

/// Last-step change (`latest - previous`) for an indicator/gender slice.
/// Needs at least two qualifying points.
pub fn trend_growth(table: &RecordTable, code: &str, gender: &str) -> Option<f64> {
    let series = table.series_for(code, Some(gender));
    match series.as_slice() {
        [.., (_, previous), (_, latest)] => Some(latest - previous),
        _ => None,
    }
}

/// Fraction of a target value reached, clamped to `[0, 1]`.
pub fn progress_ratio(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 1.0;
    }
    (value / target).clamp(0.0, 1.0)
}
