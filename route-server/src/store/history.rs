//! Recent route history.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{MapPoint, NormalizedRoute, RouteProfile};

use super::kv::{JsonStore, StoreError};

/// Fixed store key for the recent routes list.
const RECENT_ROUTES_KEY: &str = "uzh-route-recent-routes";

/// History keeps only this many entries.
const MAX_RECENT_ROUTES: usize = 10;

/// One successfully computed route, as remembered in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRouteRecord {
    pub id: String,
    pub start: MapPoint,
    pub end: MapPoint,
    pub profile: RouteProfile,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Unix milliseconds.
    pub created_at: i64,
}

impl RecentRouteRecord {
    /// Build a record for a freshly computed route.
    pub fn from_route(start: MapPoint, end: MapPoint, route: &NormalizedRoute) -> Self {
        Self {
            id: next_record_id(),
            start,
            end,
            profile: route.profile,
            distance_meters: route.distance_meters,
            duration_seconds: route.duration_seconds,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

/// Ids are a timestamp plus a process-local counter; unique within a
/// session, which is all the UI needs.
fn next_record_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", Utc::now().timestamp_millis(), n)
}

/// The recent routes log: append-only from the caller's view, bounded,
/// deduplicated, most-recent-first.
#[derive(Debug, Clone)]
pub struct RecentRoutes {
    store: Arc<JsonStore>,
}

impl RecentRoutes {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// All remembered routes, most recent first.
    pub fn all(&self) -> Vec<RecentRouteRecord> {
        self.store.get(RECENT_ROUTES_KEY)
    }

    /// Remember a route.
    ///
    /// An existing entry with the same (start, end, profile) is removed
    /// first, so re-running a route moves it to the front instead of
    /// duplicating it. The list is truncated to the newest
    /// `MAX_RECENT_ROUTES` entries.
    pub fn record(&self, record: RecentRouteRecord) -> Result<(), StoreError> {
        let mut routes = self.all();
        routes.retain(|r| {
            !(r.start.point == record.start.point
                && r.end.point == record.end.point
                && r.profile == record.profile)
        });
        routes.insert(0, record);
        routes.truncate(MAX_RECENT_ROUTES);
        self.store.put(RECENT_ROUTES_KEY, &routes)
    }

    /// Forget everything.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store
            .put::<RecentRouteRecord>(RECENT_ROUTES_KEY, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;
    use tempfile::tempdir;

    fn point(lat: f64, lon: f64) -> MapPoint {
        MapPoint::new(GeoPoint::new(lat, lon).unwrap())
    }

    fn record(start: MapPoint, end: MapPoint, profile: RouteProfile, created_at: i64) -> RecentRouteRecord {
        RecentRouteRecord {
            id: next_record_id(),
            start,
            end,
            profile,
            distance_meters: 1000.0,
            duration_seconds: 200.0,
            created_at,
        }
    }

    fn history_in(dir: &tempfile::TempDir) -> RecentRoutes {
        RecentRoutes::new(Arc::new(JsonStore::open(dir.path().join("state.json"))))
    }

    #[test]
    fn newest_first() {
        let dir = tempdir().unwrap();
        let history = history_in(&dir);

        history
            .record(record(point(48.62, 22.28), point(48.61, 22.29), RouteProfile::Car, 1))
            .unwrap();
        history
            .record(record(point(48.63, 22.27), point(48.60, 22.31), RouteProfile::Car, 2))
            .unwrap();

        let all = history.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].created_at, 2);
        assert_eq!(all[1].created_at, 1);
    }

    #[test]
    fn duplicate_query_keeps_one_entry_at_front() {
        let dir = tempdir().unwrap();
        let history = history_in(&dir);

        let start = point(48.62, 22.28);
        let end = point(48.61, 22.29);

        history
            .record(record(start.clone(), end.clone(), RouteProfile::Walk, 1))
            .unwrap();
        history
            .record(record(point(48.63, 22.27), point(48.60, 22.31), RouteProfile::Car, 2))
            .unwrap();
        // Same query again, later.
        history
            .record(record(start.clone(), end.clone(), RouteProfile::Walk, 3))
            .unwrap();

        let all = history.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].created_at, 3);
        assert_eq!(all[0].profile, RouteProfile::Walk);
    }

    #[test]
    fn same_endpoints_different_profile_are_distinct() {
        let dir = tempdir().unwrap();
        let history = history_in(&dir);

        let start = point(48.62, 22.28);
        let end = point(48.61, 22.29);

        history
            .record(record(start.clone(), end.clone(), RouteProfile::Car, 1))
            .unwrap();
        history
            .record(record(start, end, RouteProfile::Walk, 2))
            .unwrap();

        assert_eq!(history.all().len(), 2);
    }

    #[test]
    fn bounded_to_ten_entries() {
        let dir = tempdir().unwrap();
        let history = history_in(&dir);

        for i in 0..15 {
            history
                .record(record(
                    point(48.0 + f64::from(i) * 0.01, 22.28),
                    point(48.61, 22.29),
                    RouteProfile::Car,
                    i64::from(i),
                ))
                .unwrap();
        }

        let all = history.all();
        assert_eq!(all.len(), MAX_RECENT_ROUTES);
        // The newest survives, the oldest five are gone.
        assert_eq!(all[0].created_at, 14);
        assert_eq!(all.last().unwrap().created_at, 5);
    }

    #[test]
    fn clear_empties_history() {
        let dir = tempdir().unwrap();
        let history = history_in(&dir);

        history
            .record(record(point(48.62, 22.28), point(48.61, 22.29), RouteProfile::Car, 1))
            .unwrap();
        history.clear().unwrap();
        assert!(history.all().is_empty());
    }

    #[test]
    fn record_ids_are_unique() {
        let a = next_record_id();
        let b = next_record_id();
        assert_ne!(a, b);
    }
}
