//! Persisted client state.
//!
//! Two lists survive across sessions: saved favorite places and recent
//! routes. Both live in one flat JSON key-value file under fixed keys,
//! with graceful degradation on unreadable data.

mod history;
mod kv;
mod places;

pub use history::{RecentRouteRecord, RecentRoutes};
pub use kv::{JsonStore, StoreError};
pub use places::{SavedPlace, SavedPlaces};
