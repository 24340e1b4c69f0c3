//! Engine error types.
//!
//! This module defines the error types that can occur while talking to the
//! search engine over HTTP.

use thiserror::Error;

/// Errors that can occur during engine operations.
///
/// Each variant names the step of the round trip that failed: building the
/// request, reaching the engine, reading the body, or decoding it. Engine
/// rejections are carried opaquely; the raw body is logged but not parsed
/// into a structured error.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Failed to reach the engine at the transport level.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The outbound request could not be constructed.
    #[error("Request error: {0}")]
    RequestError(String),

    /// The response body could not be fully read.
    #[error("Response read error: {0}")]
    ResponseReadError(String),

    /// The engine responded with a non-2xx status.
    #[error("Engine reported error: {0}")]
    EngineReportedError(String),

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The outbound document could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The document targeted by an update does not exist.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),
}

impl EngineError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a request construction error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::RequestError(msg.into())
    }

    /// Create a response read error.
    pub fn response_read(msg: impl Into<String>) -> Self {
        Self::ResponseReadError(msg.into())
    }

    /// Create an engine-reported error.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::EngineReportedError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a document not found error.
    pub fn document_not_found(id: i64) -> Self {
        Self::DocumentNotFound(format!("id={}", id))
    }
}
