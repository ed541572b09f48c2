pub mod record;

pub use record::{Record, RecordType};
