// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{Router, routing::get};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::Catalog;
use crate::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) ws_connections: Arc<AtomicUsize>,
    pub(crate) config: AppConfig,
}

pub fn app(catalog: Arc<Catalog>, ws_connections: Arc<AtomicUsize>, config: AppConfig) -> Router {
    let state = AppState {
        catalog,
        ws_connections,
        config,
    };
    Router::new()
        .route("/", get(|| async { "pumpmon: pump-station telemetry" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/stations", get(http::stations_handler)) // GET /api/stations
        .route("/ws/telemetry", get(ws::ws_telemetry)) // WS /ws/telemetry
        .route("/ws/trend", get(ws::ws_trend)) // WS /ws/trend
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
