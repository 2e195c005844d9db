//! CLI argument definitions using clap
//!
//! Commands:
//! - odosim static --config <path>
//! - odosim serve --config <path>
//! - odosim run --config <path> --steps <n>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// odosim - Ackermann-steering odometry simulator with a web viewer
#[derive(Parser, Debug)]
#[command(name = "odosim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the simulation viewer without live input handling
    Static {
        /// Path to configuration file
        #[arg(long, default_value = "./odosim.json")]
        config: PathBuf,
    },

    /// Serve the simulation with keyboard input capture
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./odosim.json")]
        config: PathBuf,
    },

    /// Step the simulation headless and print odometry as JSON lines
    Run {
        /// Path to configuration file
        #[arg(long, default_value = "./odosim.json")]
        config: PathBuf,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 50)]
        steps: u64,

        /// Constant speed to drive at (default: the configured default speed)
        #[arg(long)]
        speed: Option<f64>,

        /// Constant steering angle in radians (default: 0)
        #[arg(long)]
        steering_angle: Option<f64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
