//! Abstract interfaces for engine operations.

mod search_engine_client;

pub use search_engine_client::SearchEngineClient;
