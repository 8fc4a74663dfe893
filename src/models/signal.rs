// Signal, metric and severity enums shared by server and client

use serde::{Deserialize, Serialize};

/// Measurable alert signal; serializes to the dashboard's original labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalType {
    #[serde(rename = "电流")]
    Current,
    #[serde(rename = "电压")]
    Voltage,
    #[serde(rename = "温度")]
    Temperature,
    #[serde(rename = "水流量")]
    Flow,
}

impl SignalType {
    /// Wire label, also the value keyword filters match against.
    pub fn label(&self) -> &'static str {
        match self {
            SignalType::Current => "电流",
            SignalType::Voltage => "电压",
            SignalType::Temperature => "温度",
            SignalType::Flow => "水流量",
        }
    }
}

/// Trend-feed metric name; serializes to lowercase JSON (e.g. "voltage").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Current,
    Voltage,
    Flow,
    Temperature,
}

/// Classification outcome of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Danger,
}

/// Device run state; serializes to lowercase JSON ("running" / "stopped").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceState {
    Running,
    Stopped,
}
