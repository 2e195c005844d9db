//! odosim - An Ackermann-steering odometry simulator with a web viewer

pub mod cli;
pub mod geometry;
pub mod http_server;
pub mod input;
pub mod observability;
pub mod odometry;
pub mod robot;
pub mod scene;
pub mod shapes;
pub mod simulation;
