//! Record source trait definition.

use crate::model::Record;

/// Trait for collaborators that supply the unified record table.
///
/// Implementations load the table once and hand out read-only views; no
/// component mutates store contents during a computation.
pub trait RecordSource: Send + Sync {
    /// Source name.
    fn name(&self) -> &str;

    /// All records in the table.
    fn records(&self) -> &[Record];
}
