//! # Search Gateway
//!
//! HTTP façade that forwards employee CRUD and search requests to the
//! external search engine.
//!
//! This crate provides the entry point, configuration wiring, and the HTTP
//! route handlers for running the gateway.

pub mod config;
pub mod http;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during gateway initialization or request handling.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Engine error.
    #[error("Engine error: {0}")]
    EngineError(#[from] search_gateway_repository::EngineError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GatewayError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
