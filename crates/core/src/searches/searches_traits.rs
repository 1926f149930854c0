use super::searches_model::{NewSearchLog, SearchLog};
use crate::errors::Result;

/// Trait for search log store operations.
pub trait SearchLogRepositoryTrait: Send + Sync {
    /// Append an entry, stamping id and creation time.
    fn append(&self, entry: NewSearchLog) -> Result<SearchLog>;

    /// The most recent entries, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<SearchLog>>;
}
