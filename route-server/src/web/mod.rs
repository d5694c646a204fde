//! Web layer for the route planner.
//!
//! Thin JSON endpoints over the routing orchestrator and the place search
//! client, plus static front-end assets.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
