//! HTTP gateway routes.
//!
//! Five routes over the engine client: insert, update, delete, search, and
//! health. Handlers share nothing but the read-only engine client; any
//! engine failure renders uniformly as a JSON 500.

pub mod handlers;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::error;

use crate::GatewayError;
use search_gateway_repository::SearchEngineClient;

/// Shared state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The engine client; handlers hold no other state.
    pub engine: Arc<dyn SearchEngineClient>,
}

/// Build the gateway router over the given engine client.
pub fn router(engine: Arc<dyn SearchEngineClient>) -> Router {
    Router::new()
        .route("/insert", post(handlers::insert))
        .route("/update", post(handlers::update))
        .route("/delete", delete(handlers::delete))
        .route("/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .with_state(AppState { engine })
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
