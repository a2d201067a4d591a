//! # Blog API Server
//!
//! Actix-web resource layer for blog posts. The binary in `main.rs` wires
//! configuration and telemetry around [`handlers::configure_routes`].

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
