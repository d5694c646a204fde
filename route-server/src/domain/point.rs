//! Geographic coordinate types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing or parsing an invalid coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidPoint {
    reason: &'static str,
}

/// A WGS84 coordinate pair.
///
/// Latitude is restricted to `[-90, 90]` and longitude to `[-180, 180]`;
/// any `GeoPoint` obtained through [`GeoPoint::new`] or [`GeoPoint::parse`]
/// satisfies these bounds. Equality is exact numeric equality with no
/// tolerance, so two points produced from different measurements of "the
/// same place" compare unequal unless bit-identical.
///
/// # Examples
///
/// ```
/// use route_server::domain::GeoPoint;
///
/// let p = GeoPoint::parse("48.6208, 22.2879").unwrap();
/// assert_eq!(p.lat, 48.6208);
/// assert_eq!(p.lon, 22.2879);
///
/// // Out-of-range latitudes are rejected
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point, validating both components.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidPoint> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidPoint {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidPoint {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lon })
    }

    /// Parse a `"lat,lon"` pair, tolerating whitespace around either number.
    pub fn parse(s: &str) -> Result<Self, InvalidPoint> {
        let (lat, lon) = s.split_once(',').ok_or(InvalidPoint {
            reason: "expected \"lat,lon\"",
        })?;
        let lat: f64 = lat.trim().parse().map_err(|_| InvalidPoint {
            reason: "latitude is not a number",
        })?;
        let lon: f64 = lon.trim().parse().map_err(|_| InvalidPoint {
            reason: "longitude is not a number",
        })?;
        Self::new(lat, lon)
    }

    /// Coordinates in `(lon, lat)` order, the order directions services use.
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// A map endpoint: a coordinate plus an optional display label.
///
/// The label carries the place name a point was picked from (a search
/// result, a saved place) and is purely presentational; equality of the
/// underlying [`GeoPoint`] is what identifies the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    #[serde(flatten)]
    pub point: GeoPoint,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MapPoint {
    /// A map point with no label.
    pub fn new(point: GeoPoint) -> Self {
        Self { point, label: None }
    }

    /// A map point carrying a display label.
    pub fn labeled(point: GeoPoint, label: impl Into<String>) -> Self {
        Self {
            point,
            label: Some(label.into()),
        }
    }
}

impl From<GeoPoint> for MapPoint {
    fn from(point: GeoPoint) -> Self {
        Self::new(point)
    }
}
