//! Search engine client trait definition.
//!
//! This module defines the abstract interface for engine operations,
//! allowing for different backend implementations (Elasticsearch, mock, etc.).

use async_trait::async_trait;

use crate::errors::EngineError;
use search_gateway_shared::Employee;

/// Abstract interface for search engine operations.
///
/// This trait defines all the operations the gateway needs from the engine.
/// Implementations can be swapped for different backends (Elasticsearch,
/// mock, etc.), enabling easy testing.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, EngineError>` for consistent error handling.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Check if the search engine is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the engine responded (any status)
    /// * `Err(EngineError::ConnectionError)` - If the engine could not be reached
    async fn health_check(&self) -> Result<bool, EngineError>;

    /// Ensure the index exists with the fixed employee mapping.
    ///
    /// Idempotent: if the index already exists, this is a success. Should be
    /// called once during application startup.
    async fn ensure_index_exists(&self) -> Result<(), EngineError>;

    /// Index a single employee document.
    ///
    /// If a document with the same id already exists, it is replaced.
    async fn insert_document(&self, employee: &Employee) -> Result<(), EngineError>;

    /// Partially update an existing employee document.
    ///
    /// The document must already exist; a missing document surfaces as
    /// `EngineError::DocumentNotFound`.
    async fn update_document(&self, employee: &Employee) -> Result<(), EngineError>;

    /// Delete an employee document by id.
    ///
    /// Deleting an absent document is not an error.
    async fn delete_document(&self, id: i64) -> Result<(), EngineError>;

    /// Fetch an employee document by id.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(employee))` - If the document exists
    /// * `Ok(None)` - If no document with that id exists
    /// * `Err(EngineError)` - If the lookup fails
    async fn fetch_document(&self, id: i64) -> Result<Option<Employee>, EngineError>;

    /// Search employees whose `name` field matches the keyword.
    ///
    /// Results are returned in the engine's relevance order. An empty hit
    /// list is a valid outcome and yields an empty vector, never an error;
    /// callers must check the length before assuming a first match.
    async fn search(&self, keyword: &str) -> Result<Vec<Employee>, EngineError>;
}
