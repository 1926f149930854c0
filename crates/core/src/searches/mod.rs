//! Search log module - models, store, and traits.

mod searches_model;
mod searches_store;
mod searches_traits;

// Re-export the public interface
pub use searches_model::{NewSearchLog, SearchLog};
pub use searches_store::MemorySearchLogRepository;
pub use searches_traits::SearchLogRepositoryTrait;
