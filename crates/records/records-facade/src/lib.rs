//! Records Facade
//!
//! High-level API for the record store. Re-exports all public types
//! from the records stack for convenient usage.

// Re-export core implementations
pub use records_core::{load_csv_path, load_csv_reader, write_csv, RecordTable};

// Re-export SPI types
pub use records_spi::{Record, RecordError, RecordSource, RecordType, Result};
