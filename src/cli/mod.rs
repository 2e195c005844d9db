//! CLI module for odosim
//!
//! Provides command-line interface for:
//! - static: serve the viewer without live input handling
//! - serve: serve the viewer with keyboard input capture
//! - run: headless simulation printing odometry JSON lines

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{headless_run, run, run_command, serve, Config};
pub use errors::{CliError, CliResult};
pub use io::write_json_line;
