pub mod forecast_error;

pub use forecast_error::{ForecastError, Result};
