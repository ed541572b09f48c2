pub mod record_error;

pub use record_error::{RecordError, Result};
