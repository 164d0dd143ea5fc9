//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - Item routes for the three validation versions
//! - Health check routes

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
