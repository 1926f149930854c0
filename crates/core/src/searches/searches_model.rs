//! Search log domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded query, kept for analytics and debugging.
///
/// Write-once: entries are appended and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchLog {
    pub id: i64,
    pub query: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
    pub result_count: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Input model for appending a search log entry.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewSearchLog {
    pub query: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
    pub result_count: Option<i64>,
}
