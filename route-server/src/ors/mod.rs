//! OpenRouteService directions adapter.
//!
//! Key-gated alternate backend for pedestrian routing. Speaks GeoJSON
//! rather than the OSRM route shape; the routing layer normalizes both
//! into the common representation, so this shape never leaks upward.

mod client;
mod error;
mod types;

pub use client::{OrsClient, OrsConfig};
pub use error::OrsError;
pub use types::{OrsGeometry, OrsProperties, OrsResponse, OrsRoute, OrsSegment, OrsStep, OrsSummary};
