//! Landmark classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of landmark classifications.
///
/// Candidates coming back from a provider are sorted into one of these
/// buckets by keyword matching on their title (and description where one
/// is available). Serialized values match the display names the HTTP API
/// exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlaceKind {
    #[serde(rename = "Museums")]
    Museums,
    #[serde(rename = "Parks & Nature")]
    ParksNature,
    #[serde(rename = "Architecture")]
    Architecture,
    #[default]
    #[serde(rename = "Historical Sites")]
    HistoricalSites,
}

impl PlaceKind {
    /// Classify a candidate by case-insensitive keyword match.
    ///
    /// Rules are checked in a fixed precedence order and the first match
    /// wins:
    ///
    /// 1. "museum" in title or description -> [`PlaceKind::Museums`]
    /// 2. "park"/"garden" in title, or "park" in description ->
    ///    [`PlaceKind::ParksNature`]
    /// 3. "bridge"/"building"/"tower" in title -> [`PlaceKind::Architecture`]
    /// 4. anything else -> [`PlaceKind::HistoricalSites`]
    pub fn classify(title: &str, description: Option<&str>) -> Self {
        let title = title.to_lowercase();
        let desc = description.map(str::to_lowercase).unwrap_or_default();

        if title.contains("museum") || desc.contains("museum") {
            Self::Museums
        } else if title.contains("park") || title.contains("garden") || desc.contains("park") {
            Self::ParksNature
        } else if title.contains("bridge")
            || title.contains("building")
            || title.contains("tower")
        {
            Self::Architecture
        } else {
            Self::HistoricalSites
        }
    }

    /// The display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Museums => "Museums",
            Self::ParksNature => "Parks & Nature",
            Self::Architecture => "Architecture",
            Self::HistoricalSites => "Historical Sites",
        }
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
