//! Saved favorite places.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::kv::{JsonStore, StoreError};

/// Fixed store key for the saved places list.
const SAVED_PLACES_KEY: &str = "uzh-route-saved-places";

/// A user-saved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlace {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Unix milliseconds.
    pub created_at: i64,
}

/// The saved places list, most-recent-first.
#[derive(Debug, Clone)]
pub struct SavedPlaces {
    store: Arc<JsonStore>,
}

impl SavedPlaces {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// All saved places, most recently saved first.
    pub fn all(&self) -> Vec<SavedPlace> {
        self.store.get(SAVED_PLACES_KEY)
    }

    /// Save a place unless an equivalent one exists.
    ///
    /// Duplicates are detected by id or by exact coordinate equality; a
    /// duplicate save is a silent no-op. New places go to the front.
    pub fn save(&self, place: SavedPlace) -> Result<(), StoreError> {
        let mut places = self.all();
        let exists = places
            .iter()
            .any(|p| p.id == place.id || (p.lat == place.lat && p.lon == place.lon));
        if exists {
            return Ok(());
        }
        places.insert(0, place);
        self.store.put(SAVED_PLACES_KEY, &places)
    }

    /// Remove a place by id. Removing an unknown id is a no-op.
    pub fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut places = self.all();
        places.retain(|p| p.id != id);
        self.store.put(SAVED_PLACES_KEY, &places)
    }
}
