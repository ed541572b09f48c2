//! Record Service Provider Interface
//!
//! Defines the unified row model for financial-inclusion indicator
//! observations, events, and event-to-indicator impact links.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RecordSource;
pub use error::{RecordError, Result};
pub use model::{Record, RecordType};
