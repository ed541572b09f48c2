//! Forecast engine implementations
//!
//! Point-in-time metrics, linear trend forecasting with confidence bands,
//! the event-to-effect overlay, and scenario scaling.

pub mod engine;
pub mod events;
pub mod metrics;
pub mod scenario;
pub mod trend;

pub use engine::run_forecast;
pub use events::{build_event_effects, RampEffectModel};
pub use metrics::{latest_value, progress_ratio, trend_growth};
pub use scenario::apply_scenario;
pub use trend::{fit_linear_forecast, LinearFit};
