// Wire protocol: one JSON object per WebSocket message, tagged by "type".

use serde::{Deserialize, Serialize};

use super::{DeviceState, Metric, Severity, SignalType};

/// Per-device status delta, pushed once per device per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatusPayload {
    pub device_id: String,
    pub device_type: String,
    pub station: String,
    pub current: f64,
    pub voltage: f64,
    pub flow: f64,
    pub status: DeviceState,
}

/// One machine-trend sample for a randomly selected monitoring point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineTrendPayload {
    pub device_key: String,
    pub metric: Metric,
    pub value: f64,
}

/// Classified measurement from a monitored alert source.
///
/// `key` identifies the event in the UI only; it is assigned client-side on
/// ingest and absent on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub device_name: String,
    pub component: String,
    pub signal_type: SignalType,
    pub unit: String,
    pub value: f64,
    pub alert_level: Severity,
    /// ISO-8601 classification time. Kept as a string on the wire; filter
    /// evaluation parses it and treats unparseable values as non-matching.
    pub time: String,
}

/// Tagged wire envelope. Unrecognized "type" values fail deserialization and
/// are discarded at the boundary instead of being trusted by shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum WsEvent {
    DeviceStatus(DeviceStatusPayload),
    MachineTrend(MachineTrendPayload),
    Alert(Vec<AlertEvent>),
}
