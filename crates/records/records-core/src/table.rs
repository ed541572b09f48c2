//! Immutable record table with filtered views.

use std::collections::HashMap;

use records_spi::{Record, RecordSource, RecordType};

/// The unified record table, loaded once per analysis session.
///
/// All views borrow from the table; derived structures are built fresh per
/// request. The table itself is never mutated after construction, so it can
/// be shared read-only (e.g. behind an `Arc`) across concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    /// Build a table from already-normalized records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All observation rows.
    pub fn observations(&self) -> impl Iterator<Item = &Record> {
        self.by_type(RecordType::Observation)
    }

    /// All event rows.
    pub fn events(&self) -> impl Iterator<Item = &Record> {
        self.by_type(RecordType::Event)
    }

    /// All impact-link rows.
    pub fn impact_links(&self) -> impl Iterator<Item = &Record> {
        self.by_type(RecordType::ImpactLink)
    }

    fn by_type(&self, rt: RecordType) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.record_type == rt)
    }

    /// Observation rows for an indicator, optionally narrowed to one gender
    /// slice.
    pub fn observations_for<'a>(
        &'a self,
        code: &'a str,
        gender: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Record> {
        self.observations().filter(move |r| {
            r.indicator_code.as_deref() == Some(code)
                && gender.map_or(true, |g| r.gender.as_deref() == Some(g))
        })
    }

    /// (year, value) pairs for an indicator/gender slice, rows missing a
    /// value or date dropped, sorted ascending by observation date.
    pub fn series_for(&self, code: &str, gender: Option<&str>) -> Vec<(i32, f64)> {
        let mut rows: Vec<&Record> = self
            .observations_for(code, gender)
            .filter(|r| r.value_numeric.is_some() && r.observation_date.is_some())
            .collect();
        rows.sort_by_key(|r| r.observation_date);
        rows.iter()
            .map(|r| (r.year().unwrap_or_default(), r.value_numeric.unwrap_or_default()))
            .collect()
    }

    /// `record_id -> record` lookup over event rows, for resolving impact
    /// links to their parent event.
    pub fn events_by_id(&self) -> HashMap<&str, &Record> {
        self.events()
            .map(|r| (r.record_id.as_str(), r))
            .collect()
    }

    /// Distinct indicator codes with at least one observation, in first-seen
    /// order.
    pub fn indicator_codes(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for rec in self.observations() {
            if let Some(code) = rec.indicator_code.as_deref() {
                if !seen.contains(&code) {
                    seen.push(code);
                }
            }
        }
        seen
    }

    /// Min and max observed year across all dated observations.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let years: Vec<i32> = self.observations().filter_map(|r| r.year()).collect();
        match (years.iter().min(), years.iter().max()) {
            (Some(&lo), Some(&hi)) => Some((lo, hi)),
            _ => None,
        }
    }

    /// Observation rows for an indicator whose year falls in
    /// `[start_year, end_year]` inclusive.
    pub fn observations_in_range<'a>(
        &'a self,
        code: &'a str,
        start_year: i32,
        end_year: i32,
    ) -> impl Iterator<Item = &'a Record> {
        self.observations_for(code, None)
            .filter(move |r| r.year().is_some_and(|y| y >= start_year && y <= end_year))
    }

    /// First candidate code that has observation rows. Used to fall back to
    /// a proxy indicator when the preferred one has no history.
    pub fn resolve_indicator<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates
            .iter()
            .find(|code| self.observations_for(code, None).next().is_some())
            .copied()
    }
}

impl RecordSource for RecordTable {
    fn name(&self) -> &str {
        "unified-record-table"
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}
