//! Unified record row types.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Discriminator for the unified record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    /// A measured indicator value at a point in time
    Observation,
    /// A discrete real-world occurrence (policy change, product launch, ...)
    Event,
    /// A qualitative assertion linking an event to an indicator
    ImpactLink,
}

impl RecordType {
    /// Wire name as it appears in the `record_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Observation => "observation",
            RecordType::Event => "event",
            RecordType::ImpactLink => "impact_link",
        }
    }

    /// Parse the `record_type` column value. Unknown tags yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "observation" => Some(RecordType::Observation),
            "event" => Some(RecordType::Event),
            "impact_link" => Some(RecordType::ImpactLink),
            _ => None,
        }
    }
}

/// One row of the unified table.
///
/// The table is a union of three variants discriminated by `record_type`;
/// fields not applicable to a variant are simply absent. Malformed values are
/// normalized to `None` at load time rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    pub record_id: String,
    /// Row variant discriminator
    pub record_type: RecordType,
    /// Date the observation was taken or the event occurred
    pub observation_date: Option<NaiveDate>,
    /// Indicator code (observations)
    pub indicator_code: Option<String>,
    /// Gender slice: "all", "male", "female", ... (observations)
    pub gender: Option<String>,
    /// Measured value (observations)
    pub value_numeric: Option<f64>,
    /// Start of the measurement period (observations)
    pub period_start: Option<NaiveDate>,
    /// End of the measurement period (observations)
    pub period_end: Option<NaiveDate>,
    /// Free-text description (events)
    pub indicator: Option<String>,
    /// `record_id` of the parent event (impact links; weak reference)
    pub parent_id: Option<String>,
    /// Indicator code this link affects (impact links)
    pub related_indicator: Option<String>,
    /// Qualitative magnitude: high/medium/low/negligible (impact links)
    pub impact_magnitude: Option<String>,
    /// Qualitative direction: increase/decrease/stabilize/mixed (impact links)
    pub impact_direction: Option<String>,
    /// Lag in months, kept as raw text and coerced downstream (impact links)
    pub lag_months: Option<String>,
}

impl Record {
    /// Create an empty record of the given type.
    pub fn new(record_id: &str, record_type: RecordType) -> Self {
        Self {
            record_id: record_id.to_string(),
            record_type,
            observation_date: None,
            indicator_code: None,
            gender: None,
            value_numeric: None,
            period_start: None,
            period_end: None,
            indicator: None,
            parent_id: None,
            related_indicator: None,
            impact_magnitude: None,
            impact_direction: None,
            lag_months: None,
        }
    }

    /// Year of `observation_date`, if present.
    pub fn year(&self) -> Option<i32> {
        self.observation_date.map(|d| d.year())
    }
}
