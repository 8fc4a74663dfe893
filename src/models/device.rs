// Station and device registry models

use serde::{Deserialize, Serialize};

use super::DeviceState;

/// A monitored piece of equipment. Created once at startup from the catalog;
/// readings are overwritten in place by incoming status events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub device_type: String,
    pub status: DeviceState,
    pub current: f64,
    pub voltage: f64,
    pub flow: f64,
}

/// A physical site grouping devices; membership is fixed at runtime and
/// insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,
    pub name: String,
    pub devices: Vec<Device>,
}

impl Station {
    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }
}
