//! # HTTP Server
//!
//! The web surface of the simulation:
//! - `/` serves the view-only canvas page, `/sim` the page with keyboard
//!   input capture (both from the static viewer directory)
//! - `/api/*` exposes telemetry (odometry, scene) and, in interactive
//!   mode, control (speed, steering angle, raw key events)
//! - `/health` reports liveness

mod config;
mod server;
mod sim_routes;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

pub use config::HttpServerConfig;
pub use server::{HttpServer, ServeMode};
pub use sim_routes::{
    control_routes, telemetry_routes, ChangeListener, ErrorResponse, FloatValueRequest,
    KeyEventRequest, SimState,
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route at the root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
