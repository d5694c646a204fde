//! Route state controller.
//!
//! Reactive orchestration over `(start, end, profile)`: every change either
//! clears the current route (an endpoint is missing) or issues exactly one
//! routing request. Requests are tagged with a monotonically increasing
//! sequence number at issue time and a completion may only touch visible
//! state while its tag still equals the most-recently-issued number, so the
//! screen always reflects the newest request even when the network resolves
//! out of order.
//!
//! Dragged endpoints are coalesced with a trailing-edge quiet-period
//! debounce before they enter the reactive path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures::future::BoxFuture;
use tracing::debug;

use crate::domain::{GeoPoint, MapPoint, NormalizedRoute, RouteProfile, RouteQuery, SharedRoute};
use crate::routing::{RouteError, RoutePlanner};
use crate::store::{RecentRouteRecord, RecentRoutes};

/// Quiet period before a dragged endpoint commits.
const DRAG_QUIET_PERIOD: Duration = Duration::from_millis(150);

/// Error notice shown when the whole fallback chain failed.
const ROUTE_ERROR_NOTICE: &str = "Не вдалося розрахувати маршрут";

/// What happens to a displayed route when a later request fails.
///
/// The prototypes left the last good route on screen under the error
/// toast; `KeepPrevious` preserves that, `Clear` is the stricter
/// alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaleRoutePolicy {
    /// Keep showing the last good route alongside the error notice.
    #[default]
    KeepPrevious,
    /// Drop the previous route when a refresh fails.
    Clear,
}

/// Controller tunables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerConfig {
    pub stale_route_policy: StaleRoutePolicy,
}

/// A user-facing notification emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Non-blocking advisory attached to a successful result.
    Warning(String),
    /// Route computation failed outright.
    Error(String),
}

/// The routing backend the controller drives.
pub trait RouteBackend: Send + Sync {
    fn route(&self, query: RouteQuery) -> BoxFuture<'_, Result<NormalizedRoute, RouteError>>;
}

impl RouteBackend for RoutePlanner {
    fn route(&self, query: RouteQuery) -> BoxFuture<'_, Result<NormalizedRoute, RouteError>> {
        Box::pin(async move { RoutePlanner::route(self, &query).await })
    }
}

#[derive(Clone, Copy)]
enum Endpoint {
    Start,
    End,
}

#[derive(Default)]
struct ControllerState {
    start: Option<MapPoint>,
    end: Option<MapPoint>,
    profile: RouteProfile,
    route: Option<NormalizedRoute>,
    loading: bool,
    notices: Vec<Notice>,
}

struct Inner {
    backend: Arc<dyn RouteBackend>,
    history: RecentRoutes,
    config: ControllerConfig,
    state: Mutex<ControllerState>,
    /// Tag of the most-recently-issued route request.
    route_seq: AtomicU64,
    /// Generation of the most recent drag event; a commit only fires if no
    /// newer drag restarted the quiet period.
    drag_seq: AtomicU64,
}

/// Client-side route state: endpoints, profile, the current route and the
/// in-flight request bookkeeping.
#[derive(Clone)]
pub struct RouteController {
    inner: Arc<Inner>,
}

impl RouteController {
    /// Create a controller over the given backend and history store.
    pub fn new(backend: Arc<dyn RouteBackend>, history: RecentRoutes, config: ControllerConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                history,
                config,
                state: Mutex::new(ControllerState::default()),
                route_seq: AtomicU64::new(0),
                drag_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Set or clear the start point and recompute.
    pub async fn set_start(&self, point: Option<MapPoint>) {
        self.lock().start = point;
        self.refresh().await;
    }

    /// Set or clear the end point and recompute.
    pub async fn set_end(&self, point: Option<MapPoint>) {
        self.lock().end = point;
        self.refresh().await;
    }

    /// Switch the routing profile and recompute.
    pub async fn set_profile(&self, profile: RouteProfile) {
        self.lock().profile = profile;
        self.refresh().await;
    }

    /// Swap start and end and recompute.
    pub async fn swap_endpoints(&self) {
        {
            let mut state = self.lock();
            let state = &mut *state;
            std::mem::swap(&mut state.start, &mut state.end);
        }
        self.refresh().await;
    }

    /// Drop endpoints and the current route.
    pub fn clear(&self) {
        // Orphan any in-flight request so a late completion cannot
        // resurrect the route.
        self.inner.route_seq.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        state.start = None;
        state.end = None;
        state.route = None;
        state.loading = false;
    }

    /// Re-run a route from history.
    pub async fn restore(&self, record: &RecentRouteRecord) {
        {
            let mut state = self.lock();
            state.start = Some(record.start.clone());
            state.end = Some(record.end.clone());
            state.profile = record.profile;
        }
        self.refresh().await;
    }

    /// Load endpoints and profile from a share link.
    pub async fn apply_shared(&self, shared: SharedRoute) {
        {
            let mut state = self.lock();
            state.start = Some(MapPoint::new(shared.start));
            state.end = Some(MapPoint::new(shared.end));
            state.profile = shared.profile;
        }
        self.refresh().await;
    }

    /// The current state as a shareable link, when both endpoints are set.
    pub fn shared_route(&self) -> Option<SharedRoute> {
        let state = self.lock();
        Some(SharedRoute::new(
            state.start.as_ref()?.point,
            state.end.as_ref()?.point,
            state.profile,
        ))
    }

    /// Feed a drag event for the start marker.
    ///
    /// The new position commits only after [`DRAG_QUIET_PERIOD`] passes
    /// with no further drag events (trailing edge, never leading).
    pub fn drag_start(&self, point: GeoPoint) {
        self.schedule_drag(Endpoint::Start, point);
    }

    /// Feed a drag event for the end marker.
    pub fn drag_end(&self, point: GeoPoint) {
        self.schedule_drag(Endpoint::End, point);
    }

    /// The route currently on screen.
    pub fn current_route(&self) -> Option<NormalizedRoute> {
        self.lock().route.clone()
    }

    /// Whether a route request is in flight.
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Current start point.
    pub fn start(&self) -> Option<MapPoint> {
        self.lock().start.clone()
    }

    /// Current end point.
    pub fn end(&self) -> Option<MapPoint> {
        self.lock().end.clone()
    }

    /// Current profile.
    pub fn profile(&self) -> RouteProfile {
        self.lock().profile
    }

    /// Drain pending user notices, oldest first.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.lock().notices)
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.inner.state.lock().expect("controller state lock poisoned")
    }

    fn schedule_drag(&self, which: Endpoint, point: GeoPoint) {
        let seq = self.inner.drag_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let controller = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(DRAG_QUIET_PERIOD).await;
            if controller.inner.drag_seq.load(Ordering::SeqCst) != seq {
                // A newer drag event restarted the quiet period.
                return;
            }
            let point = Some(MapPoint::new(point));
            match which {
                Endpoint::Start => controller.set_start(point).await,
                Endpoint::End => controller.set_end(point).await,
            }
        });
    }

    /// React to the current `(start, end, profile)`.
    async fn refresh(&self) {
        let query = {
            let mut state = self.lock();
            match (&state.start, &state.end) {
                (Some(start), Some(end)) => {
                    let query = RouteQuery::new(start.point, end.point, state.profile);
                    state.loading = true;
                    query
                }
                _ => {
                    // No complete query: clear immediately, no request, and
                    // orphan anything still in flight.
                    self.inner.route_seq.fetch_add(1, Ordering::SeqCst);
                    state.route = None;
                    state.loading = false;
                    return;
                }
            }
        };

        let seq = self.inner.route_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.inner.backend.route(query).await;

        if self.inner.route_seq.load(Ordering::SeqCst) != seq {
            // Superseded while in flight; a newer request owns the screen.
            return;
        }

        match result {
            Ok(route) => {
                let (start, end) = {
                    let mut state = self.lock();
                    state.loading = false;
                    if let Some(warning) = route.warnings.first() {
                        state.notices.push(Notice::Warning(warning.clone()));
                    }
                    state.route = Some(route.clone());
                    (state.start.clone(), state.end.clone())
                };

                if let (Some(start), Some(end)) = (start, end) {
                    let record = RecentRouteRecord::from_route(start, end, &route);
                    if let Err(e) = self.inner.history.record(record) {
                        debug!(error = %e, "failed to persist route history");
                    }
                }
            }
            Err(RouteError::NoRoute) => {
                let mut state = self.lock();
                state.loading = false;
                state.notices.push(Notice::Error(ROUTE_ERROR_NOTICE.to_string()));
                if self.inner.config.stale_route_policy == StaleRoutePolicy::Clear {
                    state.route = None;
                }
            }
        }
    }
}
