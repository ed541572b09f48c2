pub mod forecast_row;
pub mod impact;
pub mod request;
pub mod scenario;

pub use forecast_row::{ForecastRow, TrendPoint, CONFIDENCE_Z};
pub use impact::{link_effect, Direction, Magnitude, RAMP_WEIGHTS};
pub use request::ForecastRequest;
pub use scenario::Scenario;
