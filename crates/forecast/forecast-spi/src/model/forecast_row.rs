//! Forecast output rows.

use serde::{Deserialize, Serialize};

/// Z multiplier for the fixed 95% normal-approximation confidence band.
pub const CONFIDENCE_Z: f64 = 1.96;

/// One target year of a baseline trend fit.
///
/// All value fields are `None` when fewer than two valid historical points
/// exist; callers branch on absence rather than catch errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Target year
    pub year: i32,
    /// Central estimate from the linear fit
    pub forecast: Option<f64>,
    /// Lower bound of the confidence band
    pub ci_low: Option<f64>,
    /// Upper bound of the confidence band
    pub ci_high: Option<f64>,
}

impl TrendPoint {
    /// A row with every value absent, for series too short to fit.
    pub fn undefined(year: i32) -> Self {
        Self {
            year,
            forecast: None,
            ci_low: None,
            ci_high: None,
        }
    }
}

/// One target year of a full forecast response.
///
/// The event overlay adjusts only the central estimate; the confidence band
/// always belongs to the baseline fit. Columns not requested stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    /// Target year
    pub year: i32,
    /// Baseline central estimate
    pub forecast: Option<f64>,
    /// Lower bound of the confidence band
    pub ci_low: Option<f64>,
    /// Upper bound of the confidence band
    pub ci_high: Option<f64>,
    /// Central estimate plus aggregated event effects
    pub forecast_with_events: Option<f64>,
    /// Scenario-scaled central estimate
    pub forecast_with_scenario: Option<f64>,
}

impl From<TrendPoint> for ForecastRow {
    fn from(point: TrendPoint) -> Self {
        Self {
            year: point.year,
            forecast: point.forecast,
            ci_low: point.ci_low,
            ci_high: point.ci_high,
            forecast_with_events: None,
            forecast_with_scenario: None,
        }
    }
}
