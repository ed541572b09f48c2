//! Scenario scaling.

use forecast_spi::Scenario;

/// Scale one forecast value by the scenario factor. Absent stays absent.
pub fn scale(value: Option<f64>, scenario: Scenario) -> Option<f64> {
    value.map(|v| v * scenario.factor())
}

/// Scale a forecast series by the scenario factor. The confidence band is
/// never rescaled; this applies to central estimates only.
pub fn apply_scenario(values: &[Option<f64>], scenario: Scenario) -> Vec<Option<f64>> {
    values.iter().map(|&v| scale(v, scenario)).collect()
}
