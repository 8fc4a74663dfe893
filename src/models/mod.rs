// Domain models and wire types

mod device;
mod signal;
mod wire;

pub use device::{Device, Station};
pub use signal::{DeviceState, Metric, Severity, SignalType};
pub use wire::{AlertEvent, DeviceStatusPayload, MachineTrendPayload, WsEvent};
