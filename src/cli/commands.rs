//! CLI command implementations
//!
//! `static` and `serve` boot the HTTP server (view-only and interactive
//! respectively); `run` steps the simulation headless and prints the
//! odometry trace as JSON lines.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig, ServeMode};
use crate::observability::Logger;
use crate::simulation::{Simulation, SimulationParameters};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json_line;

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Simulation bounds and defaults
    #[serde(default)]
    pub simulation: SimulationParameters,
}

impl Config {
    /// Load configuration from file; a missing file yields the defaults
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.http.tick_interval_ms == 0 {
            return Err(CliError::config_error("tick_interval_ms must be > 0"));
        }

        let p = &self.simulation;
        if p.min_speed > p.max_speed {
            return Err(CliError::config_error("min_speed must be <= max_speed"));
        }
        if p.min_steering_angle > p.max_steering_angle {
            return Err(CliError::config_error(
                "min_steering_angle must be <= max_steering_angle",
            ));
        }
        if p.min_turning_speed > p.max_turning_speed {
            return Err(CliError::config_error(
                "min_turning_speed must be <= max_turning_speed",
            ));
        }

        // The defaults feed the keyboard commands: forward uses
        // +default_speed, backward -default_speed, and steering keys
        // +/-default_turning_speed. Each must land inside its bounds or
        // every keypress would be rejected at runtime.
        if p.default_speed < 0.0 || p.default_speed > p.max_speed || -p.default_speed < p.min_speed
        {
            return Err(CliError::config_error(format!(
                "default_speed {} must be non-negative and within [{}, {}]",
                p.default_speed, p.min_speed, p.max_speed
            )));
        }
        if p.default_turning_speed < 0.0
            || p.default_turning_speed > p.max_turning_speed
            || -p.default_turning_speed < p.min_turning_speed
        {
            return Err(CliError::config_error(format!(
                "default_turning_speed {} must be non-negative and within [{}, {}]",
                p.default_turning_speed, p.min_turning_speed, p.max_turning_speed
            )));
        }

        Ok(())
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Static { config } => serve(&config, ServeMode::Static),
        Command::Serve { config } => serve(&config, ServeMode::Interactive),
        Command::Run {
            config,
            steps,
            speed,
            steering_angle,
        } => headless_run(&config, steps, speed, steering_angle),
    }
}

/// Boot the HTTP server in the given mode and serve until interrupted
pub fn serve(config_path: &Path, mode: ServeMode) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let server = HttpServer::with_config(mode, config.http, config.simulation);

    // Control changes arriving over the API show up in the server log.
    let state = server.state();
    state.on_speed_change(Box::new(|value| {
        Logger::info("SPEED_CHANGED", &[("value", &value.to_string())]);
    }));
    state.on_steering_angle_change(Box::new(|value| {
        Logger::info("STEERING_ANGLE_CHANGED", &[("value", &value.to_string())]);
    }));

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Step the simulation without a server, printing odometry per tick
pub fn headless_run(
    config_path: &Path,
    steps: u64,
    speed: Option<f64>,
    steering_angle: Option<f64>,
) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let dt = config.http.tick_interval_secs();

    let mut simulation = Simulation::new(config.simulation);
    simulation.start_moving_forward(speed)?;
    if let Some(angle) = steering_angle {
        simulation.set_steering_angle(angle)?;
    }

    for _ in 0..steps {
        simulation.step(dt)?;
        write_json_line(&simulation.odometry())?;
    }

    Ok(())
}
