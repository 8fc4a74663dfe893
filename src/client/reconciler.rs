// Merges device-status deltas into the station registry.

use crate::models::{DeviceStatusPayload, Station};

/// Station/device registry on the consuming side. Membership is fixed at
/// construction; only per-device readings change.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    stations: Vec<Station>,
}

impl StationRegistry {
    pub fn new(stations: Vec<Station>) -> Self {
        StationRegistry { stations }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn device(&self, id: &str) -> Option<&crate::models::Device> {
        self.stations.iter().find_map(|s| s.device(id))
    }

    /// Applies a status event: overwrites the fields the event carries
    /// (current, voltage, flow, status) and preserves everything else.
    /// Last-write-wins per device; an unknown device id is ignored so a
    /// device added server-side does not break older clients.
    pub fn apply_status(&mut self, event: &DeviceStatusPayload) {
        let device = self
            .stations
            .iter_mut()
            .flat_map(|s| s.devices.iter_mut())
            .find(|d| d.id == event.device_id);
        match device {
            Some(d) => {
                d.current = event.current;
                d.voltage = event.voltage;
                d.flow = event.flow;
                d.status = event.status;
            }
            None => {
                tracing::debug!(
                    device_id = %event.device_id,
                    "Status event for unknown device ignored"
                );
            }
        }
    }
}
