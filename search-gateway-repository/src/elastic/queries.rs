//! Elasticsearch query builders.

use serde_json::{json, Value};

use search_gateway_shared::Employee;

/// Build a match query filtering the `name` field by the given keyword.
///
/// The keyword goes through `json!`, so no escaping is needed regardless of
/// what the caller passes in.
pub fn build_match_query(keyword: &str) -> Value {
    json!({
        "query": {
            "match": {
                "name": keyword
            }
        }
    })
}

/// Build a partial-update body wrapping the record in a `doc` object.
pub fn build_update_body(employee: &Employee) -> Value {
    json!({ "doc": employee })
}
