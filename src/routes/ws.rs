// WebSocket handlers and stream logic.
//
// Each connection is an independent state machine: Idle until the upgrade,
// Streaming while the tick loop runs, Closed when a send fails or the client
// goes away. Breaking out of the loop drops the intervals with the task, so a
// closed connection can never leak periodic work.

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::time::{Duration, timeout};

use super::AppState;
use crate::catalog::Catalog;
use crate::classifier::classify_batch;
use crate::generator::{RandomSource, SignalGenerator};
use crate::models::WsEvent;

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Decrements the connection count on drop (connect = +1, drop = -1).
struct WsConnGuard(Arc<AtomicUsize>);

impl Drop for WsConnGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, std::sync::atomic::Ordering::Relaxed);
    }
}

/// Sends one JSON-encoded event; false means the connection is gone (or the
/// send timed out) and the stream loop should stop. Delivery is at-most-once:
/// a failed send is dropped, never retried.
async fn send_event(socket: &mut WebSocket, event: &WsEvent) -> anyhow::Result<bool> {
    let json = serde_json::to_string(event)?;
    let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Text(json.into()))).await;
    Ok(!(r.is_err() || r.unwrap_or(Ok(())).is_err()))
}

async fn send_ping(socket: &mut WebSocket) -> bool {
    let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Ping(Bytes::new()))).await;
    !(r.is_err() || r.unwrap_or(Ok(())).is_err())
}

pub(super) async fn ws_telemetry(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let catalog = state.catalog.clone();
    let interval_ms = state.config.publishing.telemetry_interval_ms;
    let conn_count = state.ws_connections.clone();
    ws.on_upgrade(move |socket| async move {
        conn_count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let _guard = WsConnGuard(conn_count);
        if let Err(e) = stream_telemetry(socket, catalog, interval_ms).await {
            tracing::info!("Telemetry stream error: {}", e);
        }
    })
}

/// Combined feed: per tick, one deviceStatus per device, one machineTrend
/// sample, one alert batch — in that order. The generator is owned by this
/// connection, so concurrent clients draw from independent RNG state.
async fn stream_telemetry(
    mut socket: WebSocket,
    catalog: Arc<Catalog>,
    interval_ms: u64,
) -> anyhow::Result<()> {
    tracing::info!("Client connected to telemetry stream");
    let mut generator = SignalGenerator::new(RandomSource::from_entropy());

    // Late ticks are skipped, never queued: a stale tick would only repeat
    // data the next one supersedes.
    let mut tick = tokio::time::interval(Duration::from_millis(interval_ms));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut ping_interval = tokio::time::interval(WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    'streaming: loop {
        tokio::select! {
            _ = tick.tick() => {
                for status in generator.device_statuses(&catalog) {
                    if !send_event(&mut socket, &WsEvent::DeviceStatus(status)).await? {
                        break 'streaming;
                    }
                }
                let trend = WsEvent::MachineTrend(generator.trend_point());
                if !send_event(&mut socket, &trend).await? {
                    break;
                }
                let alerts = classify_batch(generator.alert_readings(), chrono::Utc::now());
                if !send_event(&mut socket, &WsEvent::Alert(alerts)).await? {
                    break;
                }
            }
            _ = ping_interval.tick() => {
                if !send_ping(&mut socket).await {
                    break;
                }
            }
        }
    }
    tracing::info!("Telemetry client disconnected");
    Ok(())
}

pub(super) async fn ws_trend(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let interval_ms = state.config.publishing.trend_interval_ms;
    let conn_count = state.ws_connections.clone();
    ws.on_upgrade(move |socket| async move {
        conn_count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let _guard = WsConnGuard(conn_count);
        if let Err(e) = stream_trend(socket, interval_ms).await {
            tracing::info!("Trend stream error: {}", e);
        }
    })
}

/// Trend-only feed: one machineTrend sample per tick.
async fn stream_trend(mut socket: WebSocket, interval_ms: u64) -> anyhow::Result<()> {
    tracing::info!("Client connected to trend stream");
    let mut generator = SignalGenerator::new(RandomSource::from_entropy());

    let mut tick = tokio::time::interval(Duration::from_millis(interval_ms));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut ping_interval = tokio::time::interval(WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = tick.tick() => {
                let trend = WsEvent::MachineTrend(generator.trend_point());
                if !send_event(&mut socket, &trend).await? {
                    break;
                }
            }
            _ = ping_interval.tick() => {
                if !send_ping(&mut socket).await {
                    break;
                }
            }
        }
    }
    tracing::info!("Trend client disconnected");
    Ok(())
}
