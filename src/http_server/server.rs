//! # HTTP Server
//!
//! The simulation server: static viewer, telemetry, and (in interactive
//! mode) control endpoints, plus the background task that ticks the
//! simulation forward at a fixed interval.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::observability::Logger;
use crate::simulation::SimulationParameters;

use super::config::HttpServerConfig;
use super::sim_routes::{control_routes, telemetry_routes, SimState};

/// Which routes the server mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    /// Static Site mode: the viewer and read-only telemetry, no live
    /// input handling
    Static,
    /// Serve mode: everything, including keyboard input capture
    Interactive,
}

/// HTTP server for the simulation
pub struct HttpServer {
    config: HttpServerConfig,
    mode: ServeMode,
    state: Arc<SimState>,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration and parameters
    pub fn new(mode: ServeMode) -> Self {
        Self::with_config(
            mode,
            HttpServerConfig::default(),
            SimulationParameters::default(),
        )
    }

    /// Create a server with custom configuration
    pub fn with_config(
        mode: ServeMode,
        config: HttpServerConfig,
        parameters: SimulationParameters,
    ) -> Self {
        let state = Arc::new(SimState::new(parameters));
        let router = Self::build_router(&config, mode, state.clone());
        Self {
            config,
            mode,
            state,
            router,
        }
    }

    /// Build the combined router for the given mode
    fn build_router(config: &HttpServerConfig, mode: ServeMode, state: Arc<SimState>) -> Router {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let mut api = telemetry_routes(state.clone());
        if mode == ServeMode::Interactive {
            api = api.merge(control_routes(state));
        }

        Router::new()
            // Health check at root level
            .merge(super::health_routes())
            // Simulation API under /api
            .nest("/api", api)
            // The viewer: / is the view-only page, /sim the interactive one
            .fallback_service(ServeDir::new(&config.static_dir))
            // Apply CORS middleware
            .layer(cors)
    }

    /// The shared simulation state (for listener registration)
    pub fn state(&self) -> Arc<SimState> {
        self.state.clone()
    }

    /// The serve mode
    pub fn mode(&self) -> ServeMode {
        self.mode
    }

    /// The socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the tick task and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let tick_ms = self.config.tick_interval_ms;
        let dt = self.config.tick_interval_secs();
        let state = self.state.clone();

        // Fixed-interval tick loop. A failed step is logged and skipped;
        // dt is never negative here, so failures should not occur.
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
            loop {
                interval.tick().await;
                if let Err(err) = state.step(dt) {
                    Logger::error("TICK_FAILED", &[("error", &err.to_string())]);
                }
            }
        });

        println!("Starting odosim HTTP server on {}", addr);
        println!("Viewer:        http://{}/", addr);
        if self.mode == ServeMode::Interactive {
            println!("Interactive:   http://{}/sim", addr);
        }
        println!("Health check:  http://{}/health", addr);

        Logger::info(
            "SERVER_START",
            &[
                ("addr", &addr.to_string()),
                (
                    "mode",
                    match self.mode {
                        ServeMode::Static => "static",
                        ServeMode::Interactive => "interactive",
                    },
                ),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let server = HttpServer::new(ServeMode::Interactive);
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
        assert_eq!(server.mode(), ServeMode::Interactive);
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server =
            HttpServer::with_config(ServeMode::Static, config, SimulationParameters::default());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_in_both_modes() {
        let _interactive = HttpServer::new(ServeMode::Interactive).router();
        let _static_site = HttpServer::new(ServeMode::Static).router();
    }
}
