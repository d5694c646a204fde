//! Place search: Nominatim client, POI lookup and the search-box session.
//!
//! The client is a thin viewbox-bounded proxy over the external search
//! service. The session layers the behavior a search box needs on top:
//! normalization, a coordinate-literal shortcut, city bias, response
//! caching and cancellation of superseded requests.

mod client;
mod error;
mod session;
mod types;

pub use client::{NominatimClient, NominatimConfig};
pub use error::GeocodeError;
pub use session::{GeocodeSession, PlaceSearchApi};
pub use types::{
    GeocodingResult, InvalidCategory, NominatimAddress, NominatimPlace, PlaceAddress, Poi,
    PoiCategory,
};
