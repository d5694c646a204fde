//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::error;

use crate::domain::{GeoPoint, RouteQuery};
use crate::geocode::PoiCategory;
use crate::routing::RouteError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static front-end assets.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(get_route))
        .route("/geocode", get(geocode))
        .route("/poi", get(poi))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compute a route between two points.
async fn get_route(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Response, AppError> {
    let query = parse_route_query(&params)?;

    let route = state.planner.route(&query).await.map_err(|e| match e {
        RouteError::NoRoute => AppError::NotFound {
            message: "No route found between these points".to_string(),
        },
    })?;

    let mut response = Json(RouteResponse::new(route)).into_response();
    // Route answers depend on live upstream state; never cache them.
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));

    Ok(response)
}

/// Free-text place search inside the city viewbox.
async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<Response, AppError> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "Query parameter \"q\" is required".to_string(),
        })?;

    let limit = params.limit.unwrap_or(5).min(50);

    let results = state.geocoder.search(query, limit).await.map_err(|e| {
        error!(error = %e, "geocoding proxy error");
        AppError::Internal {
            message: "Failed to geocode location".to_string(),
        }
    })?;

    Ok(Json(results).into_response())
}

/// Points of interest by category.
async fn poi(
    State(state): State<AppState>,
    Query(params): Query<PoiParams>,
) -> Result<Response, AppError> {
    let category = params
        .category
        .as_deref()
        .and_then(|c| c.parse::<PoiCategory>().ok())
        .ok_or_else(|| AppError::BadRequest {
            message: "Invalid category".to_string(),
        })?;

    let limit = params.limit.unwrap_or(50).min(50);

    let pois = state
        .geocoder
        .poi_search(category, limit)
        .await
        .map_err(|e| {
            error!(error = %e, "POI fetch error");
            AppError::Internal {
                message: "Не вдалося завантажити POI (Nominatim). Спробуйте пізніше.".to_string(),
            }
        })?;

    Ok(Json(pois).into_response())
}

/// Parse and validate the /route query parameters.
///
/// Rejected requests never reach a provider.
fn parse_route_query(params: &RouteParams) -> Result<RouteQuery, AppError> {
    let profile = match params.profile.as_deref() {
        None => crate::domain::RouteProfile::Car,
        Some(raw) => raw.parse().map_err(|_| AppError::BadRequest {
            message: format!("Unknown profile: {raw}"),
        })?,
    };

    let (Some(start_raw), Some(end_raw)) = (params.start.as_deref(), params.end.as_deref()) else {
        return Err(AppError::BadRequest {
            message: "Start and end coordinates are required".to_string(),
        });
    };

    let start = GeoPoint::parse(start_raw).map_err(|_| AppError::BadRequest {
        message: "Invalid coordinates format".to_string(),
    })?;
    let end = GeoPoint::parse(end_raw).map_err(|_| AppError::BadRequest {
        message: "Invalid coordinates format".to_string(),
    })?;

    Ok(RouteQuery::new(start, end, profile))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
