//! Ordinary least-squares trend fit with a fixed 95% confidence band.

use forecast_spi::{ForecastError, Result, TrendPoint, CONFIDENCE_Z};

/// First-degree polynomial fitted to a (year, value) series.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Sample standard deviation of the fit residuals (N-1 denominator);
    /// zero when fewer than two residuals exist.
    pub sigma: f64,
}

impl LinearFit {
    /// Closed-form OLS fit. Returns `None` with fewer than two points or a
    /// degenerate x spread (all observations in the same year).
    pub fn fit(series: &[(i32, f64)]) -> Option<Self> {
        let n = series.len() as f64;
        if series.len() < 2 {
            return None;
        }

        let sum_x: f64 = series.iter().map(|&(x, _)| x as f64).sum();
        let sum_y: f64 = series.iter().map(|&(_, y)| y).sum();
        let sum_xx: f64 = series.iter().map(|&(x, _)| (x as f64).powi(2)).sum();
        let sum_xy: f64 = series.iter().map(|&(x, y)| x as f64 * y).sum();

        let denom = n * sum_xx - sum_x * sum_x;
        if denom.abs() < f64::EPSILON {
            return None;
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denom;
        let intercept = (sum_y - slope * sum_x) / n;

        let residuals: Vec<f64> = series
            .iter()
            .map(|&(x, y)| y - (intercept + slope * x as f64))
            .collect();
        let sigma = sample_std_dev(&residuals);

        Some(Self {
            slope,
            intercept,
            sigma,
        })
    }

    /// Project the fitted line to a year.
    pub fn predict(&self, year: i32) -> f64 {
        self.intercept + self.slope * year as f64
    }
}

/// Unbiased sample standard deviation; zero below two values.
fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

/// Fit a linear trend to a historical series and project it to the target
/// years with a symmetric `±1.96σ` band.
///
/// With fewer than two valid points every field of every row is absent, so
/// the caller can render "no data" without special-casing. An empty
/// `target_years` list is a caller bug and fails hard.
pub fn fit_linear_forecast(series: &[(i32, f64)], target_years: &[i32]) -> Result<Vec<TrendPoint>> {
    if target_years.is_empty() {
        return Err(ForecastError::invalid_parameter(
            "target_years",
            "must not be empty",
        ));
    }

    let fit = match LinearFit::fit(series) {
        Some(fit) => fit,
        None => {
            return Ok(target_years
                .iter()
                .map(|&year| TrendPoint::undefined(year))
                .collect());
        }
    };

    let band = CONFIDENCE_Z * fit.sigma;
    Ok(target_years
        .iter()
        .map(|&year| {
            let forecast = fit.predict(year);
            TrendPoint {
                year,
                forecast: Some(forecast),
                ci_low: Some(forecast - band),
                ci_high: Some(forecast + band),
            }
        })
        .collect())
}
