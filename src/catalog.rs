// Station/device catalog: built once at startup, shared read-only (Arc).
// Devices are never created or destroyed at runtime.

use crate::models::{Device, DeviceState, SignalType, Station};

/// Monitoring points on the machine units, sampled by the trend feed.
pub const TREND_DEVICE_KEYS: [&str; 4] =
    ["motor-rear", "motor-front", "bearing-front", "bearing-rear"];

/// A fixed signal source watched by the alert pipeline, with the value range
/// its synthetic measurements are drawn from.
#[derive(Debug, Clone, Copy)]
pub struct AlertSource {
    pub device_name: &'static str,
    pub component: &'static str,
    pub signal_type: SignalType,
    pub unit: &'static str,
    pub min: i64,
    pub max: i64,
}

/// The three monitored sources. Ranges straddle the alert thresholds so every
/// severity tier shows up in the stream.
pub const ALERT_SOURCES: [AlertSource; 3] = [
    AlertSource {
        device_name: "通风机1",
        component: "电机前端",
        signal_type: SignalType::Current,
        unit: "A",
        min: 20,
        max: 80,
    },
    AlertSource {
        device_name: "潜水泵2",
        component: "轴承箱后端",
        signal_type: SignalType::Temperature,
        unit: "°C",
        min: 40,
        max: 120,
    },
    AlertSource {
        device_name: "混流泵3",
        component: "电机后端",
        signal_type: SignalType::Voltage,
        unit: "V",
        min: 300,
        max: 450,
    },
];

/// Immutable station/device registry plus the fixed alert and trend sources.
#[derive(Debug)]
pub struct Catalog {
    stations: Vec<Station>,
}

impl Catalog {
    /// Builds the two pump stations with their seed readings.
    pub fn seed() -> Self {
        let stations = vec![
            Station {
                id: "station-1".into(),
                name: "泵站一".into(),
                devices: vec![
                    device("dev-1", "潜水贯流泵", DeviceState::Running, 45.0, 380.0, 1200.0),
                    device(
                        "dev-2",
                        "立式混流泵（滚动轴承）",
                        DeviceState::Running,
                        38.0,
                        380.0,
                        1100.0,
                    ),
                    device("dev-3", "通风机", DeviceState::Stopped, 0.0, 0.0, 0.0),
                    device(
                        "dev-4",
                        "立式混流泵（滑动轴承）",
                        DeviceState::Running,
                        42.0,
                        380.0,
                        950.0,
                    ),
                ],
            },
            Station {
                id: "station-2".into(),
                name: "泵站二".into(),
                devices: vec![
                    device("dev-5", "潜水贯流泵", DeviceState::Running, 40.0, 380.0, 1300.0),
                    device(
                        "dev-6",
                        "立式混流泵（滚动轴承）",
                        DeviceState::Running,
                        36.0,
                        380.0,
                        1000.0,
                    ),
                    device("dev-7", "通风机", DeviceState::Stopped, 0.0, 0.0, 0.0),
                    device(
                        "dev-8",
                        "立式混流泵（滑动轴承）",
                        DeviceState::Running,
                        39.0,
                        380.0,
                        900.0,
                    ),
                ],
            },
        ];
        Catalog { stations }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All devices with their owning station id, in display order.
    pub fn devices(&self) -> impl Iterator<Item = (&str, &Device)> {
        self.stations
            .iter()
            .flat_map(|s| s.devices.iter().map(move |d| (s.id.as_str(), d)))
    }
}

fn device(
    id: &str,
    device_type: &str,
    status: DeviceState,
    current: f64,
    voltage: f64,
    flow: f64,
) -> Device {
    Device {
        id: id.into(),
        device_type: device_type.into(),
        status,
        current,
        voltage,
        flow,
    }
}
