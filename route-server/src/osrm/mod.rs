//! OSRM-compatible directions adapter.
//!
//! Wraps one OSRM-style `/route/v1` endpoint for one call at a time.
//! Characteristics that shape the adapter:
//! - coordinates go on the wire in `(lon, lat)` order
//! - `code` is `"Ok"` on success; anything else means no route
//! - public servers differ in which pedestrian profile name they answer to,
//!   so the profile name is a per-call argument, not client state
//!
//! Any failure is a *soft* failure: the adapter returns `None` and the
//! fallback chain moves on. Raw routes are handed to the routing layer for
//! normalization; no maneuver translation happens here.

mod client;
mod error;
mod types;

pub use client::{OsrmClient, OsrmConfig};
pub use error::OsrmError;
pub use types::{OsrmGeometry, OsrmLeg, OsrmManeuver, OsrmResponse, OsrmRoute, OsrmStep};
