// Synthetic signal generation. Each WebSocket connection owns its own
// generator (private RNG state), so concurrent clients never interfere.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{ALERT_SOURCES, Catalog, TREND_DEVICE_KEYS};
use crate::models::{DeviceState, DeviceStatusPayload, MachineTrendPayload, Metric, SignalType};

/// Probability a device reports as running on any given tick.
const RUNNING_BIAS: f64 = 0.8;

/// Metrics the trend feed samples from (the original feed never emits flow).
const TREND_METRICS: [Metric; 3] = [Metric::Temperature, Metric::Voltage, Metric::Current];

/// Source of randomness behind the generator. Injectable so tests can drive
/// deterministic sequences through the classifier and windows.
pub trait ValueSource {
    /// Uniform integer in `[lo, hi]` inclusive.
    fn value_in(&mut self, lo: i64, hi: i64) -> i64;
    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
    /// Index in `[0, len)`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production source backed by a per-connection StdRng.
pub struct RandomSource(StdRng);

impl RandomSource {
    pub fn from_entropy() -> Self {
        RandomSource(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        RandomSource(StdRng::seed_from_u64(seed))
    }
}

impl ValueSource for RandomSource {
    fn value_in(&mut self, lo: i64, hi: i64) -> i64 {
        self.0.gen_range(lo..=hi)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Raw measurement from a monitored alert source, before classification.
#[derive(Debug, Clone)]
pub struct SourceReading {
    pub device_name: String,
    pub component: String,
    pub signal_type: SignalType,
    pub unit: String,
    pub value: f64,
}

/// Produces one synthetic measurement set per tick. Pure generation: never
/// touches shared device state.
pub struct SignalGenerator<S> {
    source: S,
}

impl<S: ValueSource> SignalGenerator<S> {
    pub fn new(source: S) -> Self {
        SignalGenerator { source }
    }

    /// Status tuple for one device: bounded values around the type baseline,
    /// status biased toward running.
    pub fn device_status(
        &mut self,
        station_id: &str,
        device_id: &str,
        device_type: &str,
    ) -> DeviceStatusPayload {
        DeviceStatusPayload {
            device_id: device_id.into(),
            device_type: device_type.into(),
            station: station_id.into(),
            current: self.source.value_in(30, 90) as f64,
            voltage: self.source.value_in(360, 380) as f64,
            flow: self.source.value_in(800, 2800) as f64,
            status: if self.source.chance(RUNNING_BIAS) {
                DeviceState::Running
            } else {
                DeviceState::Stopped
            },
        }
    }

    /// One trend sample for a randomly selected monitoring point and metric.
    pub fn trend_point(&mut self) -> MachineTrendPayload {
        let key = TREND_DEVICE_KEYS[self.source.pick(TREND_DEVICE_KEYS.len())];
        let metric = TREND_METRICS[self.source.pick(TREND_METRICS.len())];
        MachineTrendPayload {
            device_key: key.into(),
            metric,
            value: self.source.value_in(20, 80) as f64,
        }
    }

    /// One measurement per monitored alert source, drawn from its range.
    pub fn alert_readings(&mut self) -> Vec<SourceReading> {
        ALERT_SOURCES
            .iter()
            .map(|s| SourceReading {
                device_name: s.device_name.into(),
                component: s.component.into(),
                signal_type: s.signal_type,
                unit: s.unit.into(),
                value: self.source.value_in(s.min, s.max) as f64,
            })
            .collect()
    }

    /// Status tuples for every device in the catalog, in display order.
    pub fn device_statuses(&mut self, catalog: &Catalog) -> Vec<DeviceStatusPayload> {
        catalog
            .devices()
            .map(|(station_id, dev)| self.device_status(station_id, &dev.id, &dev.device_type))
            .collect()
    }
}
