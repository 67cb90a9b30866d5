use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use crate::greeting::Greeting;
use crate::server::AppState;
use std::sync::Arc;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /greetings/{prefix}` - every greeting whose message starts with the prefix
pub async fn get_greetings(
    State(state): State<Arc<AppState>>,
    Path(prefix): Path<String>,
) -> Result<Json<Vec<Greeting>>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;

    let greetings = store.find_by_prefix(&prefix)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() })))?;

    Ok(Json(greetings))
}
