// Inbound frame handling and reconnect policy for a dashboard session.

use chrono::{DateTime, Utc};
use tokio::time::Duration;

use super::{AlertFeed, MeasurementPoint, StationRegistry, TrendStore};
use crate::models::{Station, WsEvent};

/// Base delay for reconnect backoff.
const RECONNECT_BASE: Duration = Duration::from_secs(1);
/// Backoff ceiling; delays never exceed this.
const RECONNECT_CAP: Duration = Duration::from_secs(60);

/// Everything a connected dashboard keeps in memory: the reconciled station
/// registry, the trend windows, and the alert feed. Lost on restart; the
/// server's next ticks repopulate it.
#[derive(Debug, Clone)]
pub struct ClientState {
    pub registry: StationRegistry,
    pub trends: TrendStore,
    pub alerts: AlertFeed,
}

impl ClientState {
    pub fn new(stations: Vec<Station>, trend_capacity: usize, alert_cap: usize) -> Self {
        ClientState {
            registry: StationRegistry::new(stations),
            trends: TrendStore::new(trend_capacity),
            alerts: AlertFeed::new(alert_cap),
        }
    }

    /// Parses one wire frame and folds it into the state. Malformed JSON and
    /// unknown type tags are logged and discarded; nothing here terminates
    /// the connection.
    pub fn handle_frame(&mut self, text: &str) {
        self.handle_frame_at(text, Utc::now());
    }

    /// Like [`ClientState::handle_frame`] with an explicit receive time, so
    /// tests control trend-point timestamps.
    pub fn handle_frame_at(&mut self, text: &str, now: DateTime<Utc>) {
        match serde_json::from_str::<WsEvent>(text) {
            Ok(WsEvent::DeviceStatus(payload)) => self.registry.apply_status(&payload),
            Ok(WsEvent::MachineTrend(payload)) => self.trends.append(MeasurementPoint {
                device_key: payload.device_key,
                metric: payload.metric,
                value: payload.value,
                timestamp: now,
            }),
            Ok(WsEvent::Alert(batch)) => self.alerts.ingest_batch(batch),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed inbound message discarded");
            }
        }
    }
}

/// Delay before reconnect attempt `attempt` (0-based): bounded exponential
/// backoff, 1s doubling up to 60s.
pub fn reconnect_delay(attempt: u32) -> Duration {
    let exp = RECONNECT_BASE.saturating_mul(1u32 << attempt.min(6));
    exp.min(RECONNECT_CAP)
}
