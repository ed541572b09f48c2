//! Forecast Consumer API
//!
//! Request builders and defaults for the forecast engine.
//!
//! This crate provides:
//! - A builder for `ForecastRequest`
//! - The default forecast horizon
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use forecast_core::{
    apply_scenario, build_event_effects, fit_linear_forecast, latest_value, progress_ratio,
    run_forecast, trend_growth, LinearFit, RampEffectModel,
};

// Re-export types from SPI
pub use forecast_spi::{
    Direction, EffectModel, ForecastError, ForecastRequest, ForecastRow, Magnitude, Result,
    Scenario, TrendPoint, CONFIDENCE_Z, RAMP_WEIGHTS,
};

/// Default forecast horizon.
pub const DEFAULT_TARGET_YEARS: [i32; 3] = [2025, 2026, 2027];

/// Builder for `ForecastRequest`.
#[derive(Debug, Default, Clone)]
pub struct ForecastRequestBuilder {
    indicator_code: Option<String>,
    gender: Option<String>,
    target_years: Option<Vec<i32>>,
    include_events: bool,
    scenario: Option<Scenario>,
}

impl ForecastRequestBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indicator code.
    pub fn indicator_code(mut self, code: &str) -> Self {
        self.indicator_code = Some(code.to_string());
        self
    }

    /// Narrow to one gender slice.
    pub fn gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string());
        self
    }

    /// Set the target years.
    pub fn target_years(mut self, years: Vec<i32>) -> Self {
        self.target_years = Some(years);
        self
    }

    /// Add the event-effect overlay.
    pub fn include_events(mut self, include: bool) -> Self {
        self.include_events = include;
        self
    }

    /// Apply a scenario multiplier.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Build the request, defaulting the horizon to `DEFAULT_TARGET_YEARS`.
    pub fn build(self) -> ForecastRequest {
        ForecastRequest {
            indicator_code: self.indicator_code.unwrap_or_default(),
            gender: self.gender,
            target_years: self
                .target_years
                .unwrap_or_else(|| DEFAULT_TARGET_YEARS.to_vec()),
            include_events: self.include_events,
            scenario: self.scenario,
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastRequestBuilder, DEFAULT_TARGET_YEARS};
    pub use forecast_core::{
        apply_scenario, build_event_effects, fit_linear_forecast, latest_value, progress_ratio,
        run_forecast, trend_growth, LinearFit, RampEffectModel,
    };
    pub use forecast_spi::{
        Direction, EffectModel, ForecastError, ForecastRequest, ForecastRow, Magnitude, Result,
        Scenario, TrendPoint, CONFIDENCE_Z, RAMP_WEIGHTS,
    };
}
