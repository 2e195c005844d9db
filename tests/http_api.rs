//! HTTP API Tests
//!
//! Tests for the server-side state behind the HTTP API:
//! - Control values are clamped and listeners observe the applied value
//! - Keyboard events map to simulation state through the shared state
//! - Configuration files load with partial contents
//! - The server assembles in both serve modes

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use odosim::cli::Config;
use odosim::http_server::{HttpServer, HttpServerConfig, ServeMode, SimState};
use odosim::simulation::SimulationParameters;

// =============================================================================
// Shared State Tests
// =============================================================================

/// Out-of-range control values are clamped, and the applied value is
/// what the simulation ends up with.
#[test]
fn test_control_values_are_clamped() {
    let state = SimState::new(SimulationParameters::default());

    let applied = state.set_speed(100.0);
    assert_eq!(applied, 0.4);
    assert_eq!(state.with_simulation(|sim| sim.speed()), 0.4);

    let applied = state.set_steering_angle(-100.0);
    assert_eq!(applied, -std::f64::consts::FRAC_PI_4);
}

/// Listeners see every applied value in order.
#[test]
fn test_listeners_observe_applied_values() {
    let state = SimState::new(SimulationParameters::default());
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = seen.clone();
    state.on_speed_change(Box::new(move |value| {
        sink.lock().unwrap().push(value);
    }));

    state.set_speed(0.1);
    state.set_speed(100.0);

    assert_eq!(*seen.lock().unwrap(), vec![0.1, 0.4]);
}

/// Key events drive the simulation; unknown keys are reported as
/// unrecognized and change nothing.
#[test]
fn test_key_events_drive_the_simulation() {
    let state = SimState::new(SimulationParameters::default());

    assert!(state.apply_key("ArrowUp", true).unwrap());
    assert!(state.with_simulation(|sim| sim.speed()) > 0.0);

    assert!(state.apply_key("a", true).unwrap());
    assert!(state.with_simulation(|sim| sim.turning_speed()) < 0.0);

    assert!(!state.apply_key("q", true).unwrap());
    assert!(state.with_simulation(|sim| sim.speed()) > 0.0);

    assert!(state.apply_key("ArrowUp", false).unwrap());
    assert_eq!(state.with_simulation(|sim| sim.speed()), 0.0);
}

/// Key events notify the change listeners like direct sets do.
#[test]
fn test_key_events_notify_listeners() {
    let state = SimState::new(SimulationParameters::default());
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    state.on_speed_change(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    state.apply_key("w", true).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// The tick task entry point advances the odometry while moving.
#[test]
fn test_step_advances_the_pose() {
    let state = SimState::new(SimulationParameters::default());
    state.apply_key("w", true).unwrap();

    for _ in 0..10 {
        state.step(0.02).unwrap();
    }

    let odometry = state.with_simulation(|sim| sim.odometry());
    assert!(odometry.position().length() > 0.0);
}

// =============================================================================
// Configuration Tests
// =============================================================================

/// Partial config files fall back to defaults for missing sections.
#[test]
fn test_partial_config_file_loads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"http": {{"port": 8123, "tick_interval_ms": 10}}}}"#).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.http.port, 8123);
    assert_eq!(config.http.tick_interval_secs(), 0.01);
    assert_eq!(config.simulation.max_speed, 0.4);
}

/// The default config file matches the built-in defaults where it
/// restates them.
#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load(&dir.path().join("odosim.json")).unwrap();

    assert_eq!(config.http.socket_addr(), "0.0.0.0:8000");
    assert_eq!(config.http.tick_interval_ms, 20);
}

// =============================================================================
// Server Assembly Tests
// =============================================================================

/// The server builds in both modes and exposes its shared state.
#[test]
fn test_server_assembles_in_both_modes() {
    let interactive = HttpServer::new(ServeMode::Interactive);
    assert_eq!(interactive.mode(), ServeMode::Interactive);
    assert_eq!(interactive.socket_addr(), "0.0.0.0:8000");

    let state = interactive.state();
    state.set_speed(0.2);
    assert_eq!(state.with_simulation(|sim| sim.speed()), 0.2);

    let static_site = HttpServer::with_config(
        ServeMode::Static,
        HttpServerConfig::with_port(8080),
        SimulationParameters::default(),
    );
    assert_eq!(static_site.socket_addr(), "0.0.0.0:8080");

    // Routers assemble without panicking in either mode
    let _ = interactive.router();
    let _ = static_site.router();
}
