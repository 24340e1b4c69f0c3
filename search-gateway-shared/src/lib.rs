//! # Search Gateway Shared
//!
//! Shared data types for the employee search gateway. These types cross the
//! boundary between the HTTP gateway and the engine client, so they live in
//! their own crate to avoid a dependency cycle.

use serde::{Deserialize, Serialize};

/// An employee record as stored in the search engine.
///
/// The `id` field doubles as the document identifier in the engine; the
/// gateway never generates IDs, it only forwards caller-supplied ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, also the engine document id.
    pub id: i64,
    /// Full name. This is the field keyword searches match against.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Salary amount.
    pub salary: f64,
}

impl Employee {
    /// Create a new employee record.
    pub fn new(id: i64, name: impl Into<String>, address: impl Into<String>, salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            salary,
        }
    }
}
