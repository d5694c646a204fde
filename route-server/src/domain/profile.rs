//! Routing profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown profile name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile: {0} (expected \"car\" or \"walk\")")]
pub struct InvalidProfile(String);

/// Routing mode requested by the user.
///
/// This is the user-facing profile; each provider maps it onto its own
/// profile identifiers ("driving", "walking", "foot") during the fallback
/// chain, so `Walk` does not name a single upstream profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteProfile {
    #[default]
    Car,
    Walk,
}

impl RouteProfile {
    /// The wire name used in query strings and share links.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteProfile::Car => "car",
            RouteProfile::Walk => "walk",
        }
    }
}

impl fmt::Display for RouteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteProfile {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(RouteProfile::Car),
            "walk" => Ok(RouteProfile::Walk),
            other => Err(InvalidProfile(other.to_string())),
        }
    }
}
