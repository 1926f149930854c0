//! Landmark domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use waymark_geodata::PlaceKind;

use super::landmarks_constants::METERS_PER_DEGREE;
use crate::errors::{Error, Result};

/// Domain model representing a landmark.
///
/// `id` and `created_at` are assigned by the store on insert and never
/// change afterwards; everything else may be updated in place by the
/// background enrichment pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: PlaceKind,
    pub wikipedia_url: Option<String>,
    pub wikipedia_page_id: Option<i64>,
    pub image_url: Option<String>,
    pub opened: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new landmark.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewLandmark {
    pub title: String,
    pub description: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type", default)]
    pub kind: PlaceKind,
    pub wikipedia_url: Option<String>,
    pub wikipedia_page_id: Option<i64>,
    pub image_url: Option<String>,
    pub opened: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl NewLandmark {
    /// Check the invariants the store relies on.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("landmark title must not be empty".into()));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::Validation(format!(
                "latitude {} out of range -90..90",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::Validation(format!(
                "longitude {} out of range -180..180",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Partial update applied by merging into an existing landmark.
///
/// `None` fields are left untouched; `id` and `created_at` can never be
/// changed through a merge.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<PlaceKind>,
    pub wikipedia_url: Option<String>,
    pub wikipedia_page_id: Option<i64>,
    pub image_url: Option<String>,
    pub opened: Option<String>,
    pub categories: Option<Vec<String>>,
}

impl LandmarkUpdate {
    /// Merge the provided fields into `landmark`.
    pub fn merge_into(self, landmark: &mut Landmark) {
        if let Some(title) = self.title {
            landmark.title = title;
        }
        if let Some(description) = self.description {
            landmark.description = Some(description);
        }
        if let Some(kind) = self.kind {
            landmark.kind = kind;
        }
        if let Some(url) = self.wikipedia_url {
            landmark.wikipedia_url = Some(url);
        }
        if let Some(page_id) = self.wikipedia_page_id {
            landmark.wikipedia_page_id = Some(page_id);
        }
        if let Some(url) = self.image_url {
            landmark.image_url = Some(url);
        }
        if let Some(opened) = self.opened {
            landmark.opened = Some(opened);
        }
        if let Some(categories) = self.categories {
            landmark.categories = categories;
        }
    }
}

/// A rectangular lat/lng region described by its four edges.
///
/// Query parameter only; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Build a box, rejecting inverted or out-of-range edges.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self> {
        for (name, value) in [("north", north), ("south", south)] {
            if !value.is_finite() || !(-90.0..=90.0).contains(&value) {
                return Err(Error::Validation(format!(
                    "{} edge {} out of range -90..90",
                    name, value
                )));
            }
        }
        for (name, value) in [("east", east), ("west", west)] {
            if !value.is_finite() || !(-180.0..=180.0).contains(&value) {
                return Err(Error::Validation(format!(
                    "{} edge {} out of range -180..180",
                    name, value
                )));
            }
        }
        if north < south {
            return Err(Error::Validation(
                "north edge must not be south of the south edge".into(),
            ));
        }
        if east < west {
            return Err(Error::Validation(
                "east edge must not be west of the west edge".into(),
            ));
        }
        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }

    /// Midpoint of the box edges.
    pub fn center(&self) -> (f64, f64) {
        ((self.north + self.south) / 2.0, (self.east + self.west) / 2.0)
    }

    /// Approximate search radius covering the box, in meters.
    ///
    /// Latitude span uses a fixed degrees-to-meters factor; longitude span
    /// is additionally scaled by the cosine of the center latitude. Not
    /// globally accurate, and intentionally kept that way.
    pub fn radius_meters(&self) -> f64 {
        let (center_lat, _) = self.center();
        let ns = (self.north - self.south).abs() * METERS_PER_DEGREE;
        let ew = (self.east - self.west).abs()
            * METERS_PER_DEGREE
            * center_lat.to_radians().cos();
        ns.max(ew) / 2.0
    }

    /// Whether a point falls inside the box (edges inclusive).
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }
}
