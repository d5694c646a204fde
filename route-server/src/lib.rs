//! Route planning for Uzhhorod.
//!
//! A web server proxying public routing and geocoding services behind one
//! normalized JSON surface, together with the client-side core: route
//! state orchestration, search session, persisted places/history and
//! share/GPX export.

pub mod controller;
pub mod domain;
pub mod geocode;
pub mod gpx;
pub mod ors;
pub mod osrm;
pub mod routing;
pub mod store;
pub mod web;
