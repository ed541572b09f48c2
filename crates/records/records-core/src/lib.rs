//! Record store implementation
//!
//! Loads the unified record table from CSV, exposes filtered read-only
//! views, and serializes the normalized table back out on demand.

pub mod export;
pub mod loader;
pub mod table;

pub use export::write_csv;
pub use loader::{load_csv_path, load_csv_reader};
pub use table::RecordTable;
