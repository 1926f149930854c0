//! In-memory landmark store.
//!
//! The store is constructed once at process start and shared by `Arc`;
//! there is no global instance. A `BTreeMap` keyed by the sequential id
//! keeps iteration in insertion order, which is the order bounds queries
//! return.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use super::landmarks_model::{BoundingBox, Landmark, LandmarkUpdate, NewLandmark};
use super::landmarks_traits::LandmarkRepositoryTrait;
use crate::errors::{Error, Result};

/// In-memory implementation of [`LandmarkRepositoryTrait`].
pub struct MemoryLandmarkRepository {
    landmarks: RwLock<BTreeMap<i64, Landmark>>,
    next_id: AtomicI64,
}

impl MemoryLandmarkRepository {
    pub fn new() -> Self {
        Self {
            landmarks: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryLandmarkRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkRepositoryTrait for MemoryLandmarkRepository {
    fn get(&self, id: i64) -> Result<Option<Landmark>> {
        let landmarks = self
            .landmarks
            .read()
            .map_err(|_| Error::Repository("landmark store lock poisoned".into()))?;
        Ok(landmarks.get(&id).cloned())
    }

    fn insert(&self, new_landmark: NewLandmark) -> Result<Landmark> {
        new_landmark.validate()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let landmark = Landmark {
            id,
            title: new_landmark.title,
            description: new_landmark.description,
            lat: new_landmark.lat,
            lng: new_landmark.lng,
            kind: new_landmark.kind,
            wikipedia_url: new_landmark.wikipedia_url,
            wikipedia_page_id: new_landmark.wikipedia_page_id,
            image_url: new_landmark.image_url,
            opened: new_landmark.opened,
            categories: new_landmark.categories,
            created_at: Utc::now(),
        };

        let mut landmarks = self
            .landmarks
            .write()
            .map_err(|_| Error::Repository("landmark store lock poisoned".into()))?;
        landmarks.insert(id, landmark.clone());
        Ok(landmark)
    }

    fn update(&self, id: i64, update: LandmarkUpdate) -> Result<Option<Landmark>> {
        let mut landmarks = self
            .landmarks
            .write()
            .map_err(|_| Error::Repository("landmark store lock poisoned".into()))?;
        match landmarks.get_mut(&id) {
            Some(existing) => {
                update.merge_into(existing);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    fn find_by_bounds(&self, bounds: &BoundingBox) -> Result<Vec<Landmark>> {
        let landmarks = self
            .landmarks
            .read()
            .map_err(|_| Error::Repository("landmark store lock poisoned".into()))?;
        Ok(landmarks
            .values()
            .filter(|l| bounds.contains(l.lat, l.lng))
            .cloned()
            .collect())
    }

    fn search_by_title(&self, text: &str) -> Result<Vec<Landmark>> {
        let needle = text.to_lowercase();
        let landmarks = self
            .landmarks
            .read()
            .map_err(|_| Error::Repository("landmark store lock poisoned".into()))?;
        Ok(landmarks
            .values()
            .filter(|l| {
                l.title.to_lowercase().contains(&needle)
                    || l.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}
