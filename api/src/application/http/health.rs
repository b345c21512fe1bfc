use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{application::http::server::app_state::AppState, args::Environment};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub port: u16,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Liveness probe",
    responses((status = 200, body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "HealthScan backend is running".to_string(),
        status: "healthy".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    responses((status = 200, body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let environment = match state.args.env {
        Environment::Development => "development",
        Environment::Production => "production",
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        environment: environment.to_string(),
        port: state.args.server.port,
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    // An empty root path would register "" which axum rejects.
    let root_route = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new()
        .route(&root_route, get(root))
        .route(&format!("{}/health", root_path), get(health))
}
