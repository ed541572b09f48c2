//! Forecast Service Provider Interface
//!
//! Defines the types for linear trend forecasts with confidence bands,
//! event-impact quantification, and scenario scaling.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::EffectModel;
pub use error::{ForecastError, Result};
pub use model::{
    link_effect, Direction, ForecastRequest, ForecastRow, Magnitude, Scenario, TrendPoint,
    CONFIDENCE_Z, RAMP_WEIGHTS,
};
