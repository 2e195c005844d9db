//! Simulation HTTP Routes
//!
//! Control and telemetry endpoints for the running simulation.
//!
//! Control endpoints mirror the viewer's needs: set the speed or steering
//! angle directly (`PUT /set_speed`, `PUT /set_steering_angle`) or forward
//! a raw keyboard event (`PUT /key`). Telemetry endpoints expose the
//! odometry estimate and the world-coordinate scene for canvas rendering.

use std::sync::{Arc, RwLock};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::geometry::Vector2;
use crate::input;
use crate::observability::Logger;
use crate::odometry::Odometry;
use crate::shapes::{Shape, Style};
use crate::simulation::{Simulation, SimulationParameters, SimulationResult};

// ==================
// Shared State
// ==================

/// A callback invoked when a control value changes over the API
pub type ChangeListener = Box<dyn Fn(f64) + Send + Sync>;

/// Simulation state shared across handlers and the tick task
pub struct SimState {
    simulation: RwLock<Simulation>,
    speed_listeners: RwLock<Vec<ChangeListener>>,
    steering_listeners: RwLock<Vec<ChangeListener>>,
}

impl SimState {
    /// Create state around a fresh simulation
    pub fn new(parameters: SimulationParameters) -> Self {
        Self {
            simulation: RwLock::new(Simulation::new(parameters)),
            speed_listeners: RwLock::new(Vec::new()),
            steering_listeners: RwLock::new(Vec::new()),
        }
    }

    /// Register a callback for API-driven speed changes
    pub fn on_speed_change(&self, listener: ChangeListener) {
        self.speed_listeners.write().unwrap().push(listener);
    }

    /// Register a callback for API-driven steering angle changes
    pub fn on_steering_angle_change(&self, listener: ChangeListener) {
        self.steering_listeners.write().unwrap().push(listener);
    }

    /// Advance the simulation by one tick (used by the server's tick task)
    pub fn step(&self, dt: f64) -> SimulationResult<()> {
        self.simulation.write().unwrap().step(dt)
    }

    /// Run a closure against the simulation, read-only
    pub fn with_simulation<T>(&self, f: impl FnOnce(&Simulation) -> T) -> T {
        f(&self.simulation.read().unwrap())
    }

    /// Set the speed (clamped) and notify listeners with the applied value
    pub fn set_speed(&self, value: f64) -> f64 {
        let applied = self.simulation.write().unwrap().set_speed_clamped(value);
        self.notify(&self.speed_listeners, applied);
        applied
    }

    /// Set the steering angle (clamped) and notify listeners with the
    /// applied value
    pub fn set_steering_angle(&self, value: f64) -> f64 {
        let applied = self
            .simulation
            .write()
            .unwrap()
            .set_steering_angle_clamped(value);
        self.notify(&self.steering_listeners, applied);
        applied
    }

    /// Apply a keyboard event; returns whether the key was recognized
    pub fn apply_key(&self, key: &str, pressed: bool) -> SimulationResult<bool> {
        let Some(control) = input::classify(key) else {
            return Ok(false);
        };

        let mut simulation = self.simulation.write().unwrap();
        input::apply(&mut simulation, control, pressed)?;
        let speed = simulation.speed();
        let steering = simulation.steering_angle();
        drop(simulation);

        // Key-driven changes notify both channels, like direct sets do.
        self.notify(&self.speed_listeners, speed);
        self.notify(&self.steering_listeners, steering);
        Ok(true)
    }

    fn notify(&self, listeners: &RwLock<Vec<ChangeListener>>, value: f64) {
        for listener in listeners.read().unwrap().iter() {
            listener(value);
        }
    }
}

// ==================
// Request/Response Types
// ==================

/// Body of the value-setting endpoints
#[derive(Debug, Deserialize)]
pub struct FloatValueRequest {
    pub value: f64,
}

/// Body of the keyboard endpoint
#[derive(Debug, Deserialize)]
pub struct KeyEventRequest {
    pub key: String,
    pub pressed: bool,
}

#[derive(Debug, Serialize)]
pub struct SetValueResponse {
    pub success: bool,
    /// The value actually applied, after clamping
    pub applied: f64,
}

#[derive(Debug, Serialize)]
pub struct KeyEventResponse {
    pub success: bool,
    /// False when the key is not a control key and was ignored
    pub recognized: bool,
}

#[derive(Debug, Serialize)]
pub struct OdometryResponse {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl From<Odometry> for OdometryResponse {
    fn from(odometry: Odometry) -> Self {
        Self {
            x: odometry.x,
            y: odometry.y,
            rotation: odometry.rotation,
        }
    }
}

/// A shape flattened for the canvas: vertex pairs plus draw style
#[derive(Debug, Serialize)]
pub struct ShapeDto {
    pub vertices: Vec<[f64; 2]>,
    pub closed: bool,
    pub style: Style,
}

impl From<&Shape> for ShapeDto {
    fn from(shape: &Shape) -> Self {
        Self {
            vertices: shape
                .vertices
                .iter()
                .map(|&Vector2 { x, y }| [x, y])
                .collect(),
            closed: shape.closed,
            style: shape.style.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SceneResponse {
    pub shapes: Vec<ShapeDto>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

// ==================
// Route Handlers
// ==================

/// GET /odometry - current pose estimate
async fn get_odometry(State(state): State<Arc<SimState>>) -> Json<OdometryResponse> {
    Json(state.with_simulation(|sim| sim.odometry()).into())
}

/// GET /scene - world-coordinate shapes for rendering
async fn get_scene(State(state): State<Arc<SimState>>) -> Json<SceneResponse> {
    let shapes = state.with_simulation(|sim| sim.world_shapes());
    Json(SceneResponse {
        shapes: shapes.iter().map(ShapeDto::from).collect(),
    })
}

/// PUT /set_speed - set the robot speed (clamped at the configured bounds)
async fn put_speed(
    State(state): State<Arc<SimState>>,
    Json(request): Json<FloatValueRequest>,
) -> Json<SetValueResponse> {
    let applied = state.set_speed(request.value);
    Json(SetValueResponse {
        success: true,
        applied,
    })
}

/// PUT /set_steering_angle - set the steering angle (clamped)
async fn put_steering_angle(
    State(state): State<Arc<SimState>>,
    Json(request): Json<FloatValueRequest>,
) -> Json<SetValueResponse> {
    let applied = state.set_steering_angle(request.value);
    Json(SetValueResponse {
        success: true,
        applied,
    })
}

/// PUT /key - forward a raw keyboard event from the viewer
async fn put_key(
    State(state): State<Arc<SimState>>,
    Json(request): Json<KeyEventRequest>,
) -> Result<Json<KeyEventResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.apply_key(&request.key, request.pressed) {
        Ok(recognized) => Ok(Json(KeyEventResponse {
            success: true,
            recognized,
        })),
        Err(err) => {
            Logger::error("KEY_EVENT_REJECTED", &[("error", &err.to_string())]);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: err.to_string(),
                    code: 422,
                }),
            ))
        }
    }
}

// ==================
// Routers
// ==================

/// Read-only telemetry routes, mounted in every serve mode
pub fn telemetry_routes(state: Arc<SimState>) -> Router {
    Router::new()
        .route("/odometry", get(get_odometry))
        .route("/scene", get(get_scene))
        .with_state(state)
}

/// Control routes, mounted only in interactive mode
pub fn control_routes(state: Arc<SimState>) -> Router {
    Router::new()
        .route("/set_speed", put(put_speed))
        .route("/set_steering_angle", put(put_steering_angle))
        .route("/key", put(put_key))
        .with_state(state)
}
