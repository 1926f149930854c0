//! Locally persisted favorite landmarks.
//!
//! Favorites are full landmark snapshots keyed by id, written through to
//! durable local storage on every mutation. The storage medium sits
//! behind [`FavoritesBackend`] so the UI shell can plug in whatever the
//! platform offers; a JSON file backend is provided.

use std::fs;
use std::path::PathBuf;

use log::warn;

use waymark_core::landmarks::Landmark;

use crate::errors::ClientError;

/// Narrow persistence interface: load the whole list, persist the whole
/// list.
pub trait FavoritesBackend: Send + Sync {
    /// Load the stored list. Missing or corrupt data loads as empty.
    fn load(&self) -> Vec<Landmark>;

    /// Persist the full list, replacing whatever was stored before.
    fn persist(&self, favorites: &[Landmark]) -> Result<(), ClientError>;
}

/// Favorites stored as a serialized JSON list in a single file.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FavoritesBackend for JsonFileBackend {
    fn load(&self) -> Vec<Landmark> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(favorites) => favorites,
            Err(e) => {
                // Corrupt data is treated as no favorites.
                warn!("Ignoring unreadable favorites file: {}", e);
                Vec::new()
            }
        }
    }

    fn persist(&self, favorites: &[Landmark]) -> Result<(), ClientError> {
        let raw = serde_json::to_string(favorites)
            .map_err(|e| ClientError::Persistence(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| ClientError::Persistence(e.to_string()))
    }
}

/// In-memory favorites set, written through to the backend on every
/// mutation.
pub struct FavoritesStore {
    backend: Box<dyn FavoritesBackend>,
    favorites: Vec<Landmark>,
}

impl FavoritesStore {
    /// Load the stored favorites through the backend.
    pub fn new(backend: Box<dyn FavoritesBackend>) -> Self {
        let favorites = backend.load();
        Self { backend, favorites }
    }

    /// Add a landmark snapshot. Adding an id twice is a no-op.
    pub fn add(&mut self, landmark: Landmark) -> Result<(), ClientError> {
        if self.is_favorite(landmark.id) {
            return Ok(());
        }
        self.favorites.push(landmark);
        self.backend.persist(&self.favorites)
    }

    /// Remove by id; returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> Result<bool, ClientError> {
        let before = self.favorites.len();
        self.favorites.retain(|f| f.id != id);
        if self.favorites.len() == before {
            return Ok(false);
        }
        self.backend.persist(&self.favorites)?;
        Ok(true)
    }

    /// Flip membership; returns whether the landmark is now a favorite.
    pub fn toggle(&mut self, landmark: Landmark) -> Result<bool, ClientError> {
        if self.is_favorite(landmark.id) {
            self.remove(landmark.id)?;
            Ok(false)
        } else {
            self.add(landmark)?;
            Ok(true)
        }
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorites.iter().any(|f| f.id == id)
    }

    /// Snapshot of the stored favorites, in insertion order.
    pub fn favorites(&self) -> &[Landmark] {
        &self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use waymark_geodata::PlaceKind;

    fn landmark(id: i64, title: &str) -> Landmark {
        Landmark {
            id,
            title: title.to_string(),
            description: None,
            lat: 37.8,
            lng: -122.4,
            kind: PlaceKind::HistoricalSites,
            wikipedia_url: None,
            wikipedia_page_id: None,
            image_url: None,
            opened: None,
            categories: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn file_store(dir: &tempfile::TempDir) -> FavoritesStore {
        let path = dir.path().join("favorites.json");
        FavoritesStore::new(Box::new(JsonFileBackend::new(path)))
    }

    #[test]
    fn add_then_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = file_store(&dir);

        store.add(landmark(1, "Alcatraz Island")).unwrap();
        assert!(store.is_favorite(1));

        assert!(store.remove(1).unwrap());
        assert!(!store.is_favorite(1));
        assert!(!store.remove(1).unwrap());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = file_store(&dir);

        assert!(store.toggle(landmark(5, "Coit Tower")).unwrap());
        assert!(!store.toggle(landmark(5, "Coit Tower")).unwrap());
        assert!(!store.is_favorite(5));
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn favorites_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        {
            let mut store =
                FavoritesStore::new(Box::new(JsonFileBackend::new(path.clone())));
            store.add(landmark(1, "Alcatraz Island")).unwrap();
            store.add(landmark(2, "Fort Point")).unwrap();
        }

        let reloaded = FavoritesStore::new(Box::new(JsonFileBackend::new(path)));
        assert_eq!(reloaded.favorites().len(), 2);
        assert!(reloaded.is_favorite(2));
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "not json {{{").unwrap();

        let store = FavoritesStore::new(Box::new(JsonFileBackend::new(path)));
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir);
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn adding_the_same_id_twice_keeps_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = file_store(&dir);
        store.add(landmark(3, "Ferry Building")).unwrap();
        store.add(landmark(3, "Ferry Building")).unwrap();
        assert_eq!(store.favorites().len(), 1);
    }
}
