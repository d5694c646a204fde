//! Shareable route links.
//!
//! A route is fully reconstructible from three query parameters: `a`
//! (start), `b` (end) and `m` (profile). Links produced by the first
//! prototype used `s`/`e` for the endpoints; those are still accepted on
//! parse.

use super::point::GeoPoint;
use super::profile::RouteProfile;

/// The start/end/profile triple encoded into a share link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedRoute {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub profile: RouteProfile,
}

impl SharedRoute {
    pub fn new(start: GeoPoint, end: GeoPoint, profile: RouteProfile) -> Self {
        Self {
            start,
            end,
            profile,
        }
    }

    /// Encode as a URL query string, e.g. `a=48.62,22.28&b=48.63,22.3&m=walk`.
    pub fn to_query(&self) -> String {
        format!(
            "a={},{}&b={},{}&m={}",
            self.start.lat, self.start.lon, self.end.lat, self.end.lon, self.profile
        )
    }

    /// Decode from a URL query string.
    ///
    /// Both endpoints must be present and valid; a missing or unknown
    /// profile falls back to [`RouteProfile::Car`], matching how old links
    /// without an `m` parameter behave.
    pub fn parse_query(query: &str) -> Option<Self> {
        let mut start = None;
        let mut end = None;
        let mut profile = None;

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            // Values produced by form encoders carry the comma as %2C.
            let value = value.replace("%2C", ",");
            match key {
                "a" | "s" => start = GeoPoint::parse(&value).ok(),
                "b" | "e" => end = GeoPoint::parse(&value).ok(),
                "m" => profile = value.parse::<RouteProfile>().ok(),
                _ => {}
            }
        }

        Some(Self {
            start: start?,
            end: end?,
            profile: profile.unwrap_or(RouteProfile::Car),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn query_round_trip() {
        let shared = SharedRoute::new(
            point(48.6208, 22.2879),
            point(48.6101, 22.2955),
            RouteProfile::Walk,
        );
        let parsed = SharedRoute::parse_query(&shared.to_query()).unwrap();
        assert_eq!(parsed, shared);
    }

    #[test]
    fn accepts_legacy_endpoint_keys() {
        let parsed = SharedRoute::parse_query("s=48.62,22.28&e=48.63,22.30&m=car").unwrap();
        assert_eq!(parsed.start, point(48.62, 22.28));
        assert_eq!(parsed.end, point(48.63, 22.30));
        assert_eq!(parsed.profile, RouteProfile::Car);
    }

    #[test]
    fn missing_profile_defaults_to_car() {
        let parsed = SharedRoute::parse_query("a=48.62,22.28&b=48.63,22.30").unwrap();
        assert_eq!(parsed.profile, RouteProfile::Car);
    }

    #[test]
    fn accepts_encoded_comma() {
        let parsed = SharedRoute::parse_query("a=48.62%2C22.28&b=48.63%2C22.30&m=walk").unwrap();
        assert_eq!(parsed.start, point(48.62, 22.28));
        assert_eq!(parsed.profile, RouteProfile::Walk);
    }

    #[test]
    fn tolerates_leading_question_mark_and_extra_params() {
        let parsed =
            SharedRoute::parse_query("?layer=satellite&a=48.62,22.28&b=48.63,22.30&m=walk")
                .unwrap();
        assert_eq!(parsed.profile, RouteProfile::Walk);
    }

    #[test]
    fn rejects_incomplete_links() {
        assert!(SharedRoute::parse_query("a=48.62,22.28&m=walk").is_none());
        assert!(SharedRoute::parse_query("").is_none());
        assert!(SharedRoute::parse_query("a=bogus&b=48.63,22.30").is_none());
    }
}
