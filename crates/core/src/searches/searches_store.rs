//! In-memory search log store.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use super::searches_model::{NewSearchLog, SearchLog};
use super::searches_traits::SearchLogRepositoryTrait;
use crate::errors::{Error, Result};

/// In-memory implementation of [`SearchLogRepositoryTrait`].
///
/// Entries are appended in creation order; `recent` walks the list from
/// the back, so ties on `created_at` resolve to the later append.
pub struct MemorySearchLogRepository {
    entries: RwLock<Vec<SearchLog>>,
    next_id: AtomicI64,
}

impl MemorySearchLogRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemorySearchLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchLogRepositoryTrait for MemorySearchLogRepository {
    fn append(&self, entry: NewSearchLog) -> Result<SearchLog> {
        let log = SearchLog {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            query: entry.query,
            lat: entry.lat,
            lng: entry.lng,
            radius: entry.radius,
            result_count: entry.result_count,
            created_at: Utc::now(),
        };
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::Repository("search log lock poisoned".into()))?;
        entries.push(log.clone());
        Ok(log)
    }

    fn recent(&self, limit: usize) -> Result<Vec<SearchLog>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::Repository("search log lock poisoned".into()))?;
        let mut recent: Vec<SearchLog> = entries.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        Ok(recent)
    }
}
