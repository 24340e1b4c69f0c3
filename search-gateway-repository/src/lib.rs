//! # Search Gateway Repository
//!
//! This crate provides traits and implementations for interacting with the
//! search engine. It includes definitions for errors, interfaces, and a
//! concrete implementation for Elasticsearch-compatible engines.

pub mod config;
pub mod elastic;
pub mod errors;
pub mod interfaces;

pub use config::EngineConfig;
pub use elastic::ElasticClient;
pub use errors::EngineError;
pub use interfaces::SearchEngineClient;
