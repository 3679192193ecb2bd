//! HTTP routes and handlers for the navigation daemon API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use nav_core::GraphError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use super::state::{AppState, MutationError};
use crate::storage::{Location, LocationError};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health and status
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/status", get(status))
        // Graph editing
        .route("/admin/graph", get(get_graph))
        .route("/admin/add-location", post(add_location))
        .route("/admin/add-path", post(add_path))
        .route("/admin/remove-path", delete(remove_path))
        .route("/admin/delete-location", delete(delete_location))
        // Path finding
        .route("/find-path", post(find_path))
        // GPS metadata
        .route("/admin/gps-locations", get(list_gps_locations))
        .route("/admin/add-gps-location", post(add_gps_location))
        .route("/admin/update-gps-location", put(update_gps_location))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

// =============================================================================
// Response Types
// =============================================================================

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

fn message(text: impl Into<String>) -> Response {
    Json(MessageResponse {
        message: text.into(),
    })
    .into_response()
}

fn error(status: StatusCode, text: impl ToString, code: Option<&'static str>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: text.to_string(),
            code,
        }),
    )
        .into_response()
}

/// Malformed or incomplete JSON body.
fn bad_body(rejection: JsonRejection) -> Response {
    debug!("Rejected request body: {}", rejection.body_text());
    error(StatusCode::BAD_REQUEST, rejection.body_text(), None)
}

/// 400 listing required fields if any of them is empty.
fn require(fields: &[(&str, &str)]) -> Result<(), Response> {
    if fields.iter().any(|(_, value)| value.is_empty()) {
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        return Err(error(
            StatusCode::BAD_REQUEST,
            format!("{} required", names.join(",")),
            None,
        ));
    }
    Ok(())
}

fn graph_error_status(err: &GraphError) -> StatusCode {
    match err {
        GraphError::UnknownNode { .. } => StatusCode::NOT_FOUND,
        GraphError::DuplicateNode { .. }
        | GraphError::InvalidWeight { .. }
        | GraphError::SelfLoop { .. }
        | GraphError::InvalidSnapshot { .. } => StatusCode::BAD_REQUEST,
    }
}

fn mutation_error(err: MutationError) -> Response {
    match err {
        MutationError::Graph(e) => {
            warn!("Graph mutation rejected: {}", e);
            error(graph_error_status(&e), &e, Some(e.code()))
        }
        MutationError::Persist(e) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to save graph: {}", e),
            None,
        ),
    }
}

fn location_error(err: LocationError) -> Response {
    let status = match &err {
        LocationError::NotFound { .. } => StatusCode::NOT_FOUND,
        LocationError::Duplicate { .. }
        | LocationError::InvalidCoordinates { .. }
        | LocationError::EmptyName => StatusCode::BAD_REQUEST,
        LocationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("GPS location request failed: {}", err);
    error(status, err, None)
}

// =============================================================================
// Health & Status
// =============================================================================

async fn banner() -> &'static str {
    "Campus Navigation Backend - Running"
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "nav-daemon"
    }))
}

#[derive(Serialize)]
struct StatusResponse {
    status: String,
    node_count: usize,
    edge_count: usize,
    gps_location_count: usize,
    graph_file: String,
    gps_file: String,
    started_at: String,
    uptime_seconds: f64,
}

async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot().await;
    let locations = state.locations.read().await;

    Json(StatusResponse {
        status: "running".to_string(),
        node_count: snapshot.node_count(),
        edge_count: snapshot.edge_count(),
        gps_location_count: locations.len(),
        graph_file: state.graph_file.path().display().to_string(),
        gps_file: locations.path().display().to_string(),
        started_at: state.started_at.to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
    })
}

// =============================================================================
// Graph Editing
// =============================================================================

async fn get_graph(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.snapshot().await)
}

#[derive(Deserialize)]
struct AddLocationRequest {
    name: String,
}

async fn add_location(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddLocationRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection),
    };
    if let Err(resp) = require(&[("name", &req.name)]) {
        return resp;
    }
    // New names must have visible characters; existing ones are used as-is
    if req.name.trim().is_empty() {
        return error(StatusCode::BAD_REQUEST, "name must not be blank", None);
    }

    match state.mutate(|g| g.add_node(&req.name)).await {
        Ok(()) => {
            info!("Location '{}' added", req.name);
            message(format!("Location '{}' added", req.name))
        }
        Err(e) => mutation_error(e),
    }
}

#[derive(Deserialize)]
struct AddPathRequest {
    from: String,
    to: String,
    distance: f64,
}

async fn add_path(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddPathRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection),
    };
    if let Err(resp) = require(&[("from", &req.from), ("to", &req.to)]) {
        return resp;
    }

    match state
        .mutate(|g| g.add_or_update_edge(&req.from, &req.to, req.distance))
        .await
    {
        Ok(()) => {
            info!("Path {} <-> {} set to {}m", req.from, req.to, req.distance);
            message(format!(
                "Path added: {} <-> {} ({}m)",
                req.from, req.to, req.distance
            ))
        }
        Err(e) => mutation_error(e),
    }
}

#[derive(Deserialize)]
struct RemovePathRequest {
    from: String,
    to: String,
}

async fn remove_path(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RemovePathRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection),
    };

    match state
        .mutate(|g| Ok(g.remove_edge(&req.from, &req.to)))
        .await
    {
        Ok(removed) => {
            if removed {
                info!("Path {} <-> {} removed", req.from, req.to);
            } else {
                debug!("No path between {} and {} to remove", req.from, req.to);
            }
            message(format!("Path removed between {} and {}", req.from, req.to))
        }
        Err(e) => mutation_error(e),
    }
}

#[derive(Deserialize)]
struct DeleteLocationRequest {
    name: String,
}

async fn delete_location(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DeleteLocationRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection),
    };

    match state.mutate(|g| g.delete_node(&req.name)).await {
        Ok(()) => {
            info!("Location '{}' deleted", req.name);
            message(format!("Location '{}' deleted", req.name))
        }
        Err(e) => mutation_error(e),
    }
}

// =============================================================================
// Path Finding
// =============================================================================

#[derive(Deserialize)]
struct FindPathRequest {
    source: String,
    destination: String,
}

async fn find_path(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FindPathRequest>, JsonRejection>,
) -> Response {
    let start = Instant::now();

    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection),
    };
    if let Err(resp) = require(&[("source", &req.source), ("destination", &req.destination)]) {
        return resp;
    }

    // Query runs against a frozen snapshot, outside the lock
    let snapshot = state.snapshot().await;
    let outcome = snapshot.shortest_path(&req.source, &req.destination);

    if outcome.is_found() {
        debug!(
            "find-path {} -> {}: {} stops in {:?}",
            req.source,
            req.destination,
            outcome.path().len(),
            start.elapsed()
        );
    } else {
        debug!(
            "find-path {} -> {}: {:?} in {:?}",
            req.source,
            req.destination,
            outcome.reason(),
            start.elapsed()
        );
    }
    Json(outcome).into_response()
}

// =============================================================================
// GPS Metadata
// =============================================================================

async fn list_gps_locations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let locations = state.locations.read().await;
    Json(locations.list().to_vec())
}

#[derive(Serialize)]
struct LocationResponse {
    message: String,
    location: Location,
}

async fn add_gps_location(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Location>, JsonRejection>,
) -> Response {
    let Json(location) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection),
    };

    let mut locations = state.locations.write().await;
    match locations.add(location.clone()) {
        Ok(()) => {
            info!("GPS location '{}' added", location.name);
            Json(LocationResponse {
                message: "GPS location added successfully".to_string(),
                location,
            })
            .into_response()
        }
        Err(e) => location_error(e),
    }
}

async fn update_gps_location(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Location>, JsonRejection>,
) -> Response {
    let Json(location) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection),
    };

    let mut locations = state.locations.write().await;
    match locations.update(location.clone()) {
        Ok(()) => {
            info!("GPS location '{}' updated", location.name);
            Json(LocationResponse {
                message: "GPS location updated successfully".to_string(),
                location,
            })
            .into_response()
        }
        Err(e) => location_error(e),
    }
}
