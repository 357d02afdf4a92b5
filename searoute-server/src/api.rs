use std::time::Duration;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use geo::coord;
use searoute_core::{Error as CoreError, SeaRouter, Units};
use serde::Deserialize;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub router: SeaRouter,
    pub default_units: Units,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidCoordinate { .. } | CoreError::InvalidData(_) => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::IoError(_) | CoreError::GeoJsonError(_) => {
                ApiError::Internal(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub origin_lon: f64,
    pub origin_lat: f64,
    pub destination_lon: f64,
    pub destination_lat: f64,
    pub units: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SnapQuery {
    pub lon: f64,
    pub lat: f64,
}

pub fn routes(state: AppState, request_timeout: Duration, max_concurrent_requests: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(route))
        .route("/snap", get(snap))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout)
                .concurrency_limit(max_concurrent_requests),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn handle_middleware_error(error: BoxError) -> (StatusCode, Json<serde_json::Value>) {
    if error.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "error": "request timed out" })),
        )
    } else {
        tracing::error!("Unhandled middleware error: {error}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": error.to_string() })),
        )
    }
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let network = state.router.network();
    Json(json!({
        "status": "ok",
        "polylines": network.polyline_count(),
        "vertices": network.graph().vertex_count(),
        "edges": network.graph().edge_count(),
    }))
}

async fn route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Response, ApiError> {
    let units = query
        .units
        .as_deref()
        .map_or(state.default_units, Units::parse);
    let origin = coord! { x: query.origin_lon, y: query.origin_lat };
    let destination = coord! { x: query.destination_lon, y: query.destination_lat };

    // Path search is CPU bound, keep it off the async workers
    let router = state.router.clone();
    let result = tokio::task::spawn_blocking(move || {
        router.calculate_route(origin, destination, units)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("route task failed: {e}")))??;

    match result {
        Some(route) => {
            tracing::debug!(
                "Route with {} points, {:.3} {}",
                route.coordinates().len(),
                route.length,
                route.units
            );
            Ok(Json(route.to_feature()?).into_response())
        }
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No route found" })),
        )
            .into_response()),
    }
}

async fn snap(
    State(state): State<AppState>,
    Query(query): Query<SnapQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let snapped = state.router.snap(coord! { x: query.lon, y: query.lat })?;
    Ok(Json(json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "Point",
            "coordinates": [snapped.x, snapped.y],
        }
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use geo::line_string;
    use searoute_core::SeaNetwork;
    use tower::ServiceExt;

    fn app() -> Router {
        let network = SeaNetwork::new(vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)],
            line_string![(x: 1.0, y: 0.0), (x: 1.0, y: 1.0)],
            line_string![(x: 30.0, y: 30.0), (x: 31.0, y: 30.0)],
        ]);
        let state = AppState {
            router: SeaRouter::new(network),
            default_units: Units::NauticalMiles,
        };
        routes(state, Duration::from_secs(5), 4)
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn route_returns_linestring_feature() {
        let (status, body) = get_json(
            "/route?origin_lon=0&origin_lat=0&destination_lon=1&destination_lat=1&units=km",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["geometry"]["type"], "LineString");
        assert_eq!(body["geometry"]["coordinates"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["properties"]["units"], "km");
        let length = body["properties"]["length"].as_f64().unwrap();
        assert!((length - 222.39).abs() < 0.01);
    }

    #[tokio::test]
    async fn route_defaults_to_nautical_miles() {
        let (status, body) =
            get_json("/route?origin_lon=0&origin_lat=0&destination_lon=1&destination_lat=0").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["properties"]["units"], "nm");
    }

    #[tokio::test]
    async fn disconnected_route_is_not_found() {
        let (status, body) = get_json(
            "/route?origin_lon=0&origin_lat=0&destination_lon=30.5&destination_lat=30",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No route found");
    }

    #[tokio::test]
    async fn snap_returns_network_vertex() {
        let (status, body) = get_json("/snap?lon=1.3&lat=0.9").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["geometry"]["coordinates"][0], 1.0);
        assert_eq!(body["geometry"]["coordinates"][1], 1.0);
    }

    #[tokio::test]
    async fn health_reports_network_size() {
        let (status, body) = get_json("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vertices"], 5);
        assert_eq!(body["edges"], 3);
    }
}
