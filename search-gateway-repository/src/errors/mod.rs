//! Error types for the search gateway repository.

mod engine_error;

pub use engine_error::EngineError;
