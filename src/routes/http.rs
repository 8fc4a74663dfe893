// GET handlers: version, api/stations

use axum::{extract::State, response::IntoResponse};

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/stations — catalog snapshot with seed readings (read-only view;
/// live values arrive over the WS feeds).
pub(super) async fn stations_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.catalog.stations().to_vec())
}
