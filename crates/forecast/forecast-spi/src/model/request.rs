//! Forecast request parameters.

use serde::{Deserialize, Serialize};

use crate::model::Scenario;

/// Parameters of one forecast computation, supplied by the presentation
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Indicator to forecast
    pub indicator_code: String,
    /// Gender slice; `None` uses every slice of the indicator
    pub gender: Option<String>,
    /// Ordered future years to project to
    pub target_years: Vec<i32>,
    /// Whether to add the event-effect overlay to the central estimate
    pub include_events: bool,
    /// Scenario multiplier; `None` leaves the scenario column absent
    pub scenario: Option<Scenario>,
}

impl ForecastRequest {
    /// Request a baseline forecast with no overlays.
    pub fn new(indicator_code: &str, target_years: Vec<i32>) -> Self {
        Self {
            indicator_code: indicator_code.to_string(),
            gender: None,
            target_years,
            include_events: false,
            scenario: None,
        }
    }
}
