//! Route handlers for the gateway.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::http::AppState;
use crate::GatewayError;
use search_gateway_shared::Employee;

/// Query parameters for the delete route.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: i64,
}

/// Query parameters for the search route.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: String,
}

/// POST /insert — index the record, echoing it back on success.
pub async fn insert(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, GatewayError> {
    state.engine.insert_document(&employee).await?;
    debug!(id = employee.id, "Inserted employee");
    Ok(Json(employee))
}

/// POST /update — partially update the record, echoing it back on success.
pub async fn update(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, GatewayError> {
    state.engine.update_document(&employee).await?;
    debug!(id = employee.id, "Updated employee");
    Ok(Json(employee))
}

/// DELETE /delete?id= — remove the record by id.
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Value>, GatewayError> {
    state.engine.delete_document(params.id).await?;
    debug!(id = params.id, "Deleted employee");
    Ok(Json(json!({ "id": params.id })))
}

/// GET /search?keyword= — match the keyword against employee names.
///
/// An empty result set is a valid 200 response with an empty array.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Employee>>, GatewayError> {
    let results = state.engine.search(&params.keyword).await?;
    debug!(keyword = %params.keyword, hits = results.len(), "Search completed");
    Ok(Json(results))
}

/// GET /health — report liveness of the engine connection.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
    state.engine.health_check().await?;
    Ok(Json(json!({ "status": "OK" })))
}
