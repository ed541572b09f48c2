//! Forecast request orchestration.
//!
//! Builds the historical slice, fits the baseline trend, then layers the
//! requested overlays: event effects are added to the central estimate
//! first, and the scenario factor multiplies whatever central estimate the
//! request ends up with (event-adjusted when events are requested, raw
//! otherwise). The confidence band always belongs to the baseline fit.

use forecast_spi::{ForecastError, ForecastRequest, ForecastRow, Result};
use records_core::RecordTable;
use tracing::debug;

use crate::events::build_event_effects;
use crate::scenario;
use crate::trend::fit_linear_forecast;

/// Run one forecast request against the record table.
pub fn run_forecast(table: &RecordTable, request: &ForecastRequest) -> Result<Vec<ForecastRow>> {
    if request.indicator_code.trim().is_empty() {
        return Err(ForecastError::invalid_parameter(
            "indicator_code",
            "must not be blank",
        ));
    }

    let series = table.series_for(&request.indicator_code, request.gender.as_deref());
    debug!(
        indicator = %request.indicator_code,
        points = series.len(),
        "fitting linear trend"
    );
    let points = fit_linear_forecast(&series, &request.target_years)?;

    let effects = request
        .include_events
        .then(|| build_event_effects(table, &request.indicator_code));

    let rows = points
        .into_iter()
        .map(|point| {
            let mut row = ForecastRow::from(point);
            if let Some(effects) = &effects {
                // Missing years read as zero effect
                let effect = effects.get(&row.year).copied().unwrap_or(0.0);
                row.forecast_with_events = row.forecast.map(|f| f + effect);
            }
            if let Some(scenario) = request.scenario {
                let central = if request.include_events {
                    row.forecast_with_events
                } else {
                    row.forecast
                };
                row.forecast_with_scenario = scenario::scale(central, scenario);
            }
            row
        })
        .collect();

    Ok(rows)
}
