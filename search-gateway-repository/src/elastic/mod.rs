//! Elasticsearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! over the engine's plain HTTP REST API.

mod client;
mod index_config;
mod queries;

pub use client::ElasticClient;
