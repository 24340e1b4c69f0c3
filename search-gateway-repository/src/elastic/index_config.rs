//! Elasticsearch index mapping for employee documents.

use serde_json::{json, Value};

/// Get the mapping body for the employee index.
///
/// The mapping is fixed: `id` is an integer, `name` and `address` are
/// analyzed text fields, and `salary` is a float. Keyword searches in the
/// gateway match on `name`.
pub fn mapping_body() -> Value {
    json!({
        "mappings": {
            "properties": {
                "id": {
                    "type": "integer"
                },
                "name": {
                    "type": "text"
                },
                "address": {
                    "type": "text"
                },
                "salary": {
                    "type": "float"
                }
            }
        }
    })
}
