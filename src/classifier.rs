// Threshold classification. Pure and total: every (signal, value) pair maps
// to exactly one severity, with no hidden state.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::generator::SourceReading;
use crate::models::{AlertEvent, Severity, SignalType};

/// Severity of a measurement against the per-signal threshold table.
///
/// All comparisons are strict: a value exactly at a threshold stays in the
/// lower tier, so readings hovering on a boundary do not flap between tiers.
pub fn classify(signal: SignalType, value: f64) -> Severity {
    match signal {
        SignalType::Current => {
            if value > 100.0 {
                Severity::Danger
            } else if value > 60.0 {
                Severity::Warning
            } else {
                Severity::Normal
            }
        }
        SignalType::Temperature => {
            if value > 100.0 {
                Severity::Danger
            } else if value > 90.0 {
                Severity::Warning
            } else {
                Severity::Normal
            }
        }
        // Voltage alerts in either direction: warning outside 340..420,
        // danger outside the wider 300..460 escalation band.
        SignalType::Voltage => {
            if value > 460.0 || value < 300.0 {
                Severity::Danger
            } else if value > 420.0 || value < 340.0 {
                Severity::Warning
            } else {
                Severity::Normal
            }
        }
        // Flow is charted but not alerted on.
        SignalType::Flow => Severity::Normal,
    }
}

/// Attaches severity and the classification time to a raw reading.
pub fn classify_reading(reading: SourceReading, at: DateTime<Utc>) -> AlertEvent {
    let alert_level = classify(reading.signal_type, reading.value);
    AlertEvent {
        key: String::new(),
        device_name: reading.device_name,
        component: reading.component,
        signal_type: reading.signal_type,
        unit: reading.unit,
        value: reading.value,
        alert_level,
        time: at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Classifies a whole tick's readings with a single shared timestamp.
pub fn classify_batch(readings: Vec<SourceReading>, at: DateTime<Utc>) -> Vec<AlertEvent> {
    readings
        .into_iter()
        .map(|r| classify_reading(r, at))
        .collect()
}
