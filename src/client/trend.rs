// Bounded per-(device, metric) time-series windows for trend charts.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::collections::VecDeque;

use crate::models::Metric;

/// One sample in a trend window. Append-only; never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementPoint {
    pub device_key: String,
    pub metric: Metric,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Bounded ordered buffer of recent points. Timestamps are non-decreasing
/// front to back; once full, appending evicts from the front.
#[derive(Debug, Clone)]
pub struct TrendWindow {
    points: VecDeque<MeasurementPoint>,
    capacity: usize,
}

impl TrendWindow {
    pub fn new(capacity: usize) -> Self {
        TrendWindow {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a point, evicting the oldest past capacity. A point older than
    /// the current tail is dropped: the window trades it away to keep the
    /// ordering invariant without sorting.
    pub fn append(&mut self, point: MeasurementPoint) {
        if let Some(last) = self.points.back()
            && point.timestamp < last.timestamp
        {
            tracing::debug!(
                device_key = %point.device_key,
                "Out-of-order trend point dropped"
            );
            return;
        }
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &MeasurementPoint> {
        self.points.iter()
    }
}

/// All trend windows, keyed by (device key, metric). Windows materialize on
/// first append with the configured shared capacity.
#[derive(Debug, Clone)]
pub struct TrendStore {
    windows: HashMap<(String, Metric), TrendWindow>,
    capacity: usize,
}

impl TrendStore {
    pub fn new(capacity: usize) -> Self {
        TrendStore {
            windows: HashMap::new(),
            capacity,
        }
    }

    pub fn append(&mut self, point: MeasurementPoint) {
        let key = (point.device_key.clone(), point.metric);
        self.windows
            .entry(key)
            .or_insert_with(|| TrendWindow::new(self.capacity))
            .append(point);
    }

    /// Ordered points for one (device, metric), optionally restricted to an
    /// inclusive time range. O(window size).
    pub fn query(
        &self,
        device_key: &str,
        metric: Metric,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Vec<&MeasurementPoint> {
        let Some(window) = self.windows.get(&(device_key.to_string(), metric)) else {
            return Vec::new();
        };
        window
            .points()
            .filter(|p| match range {
                Some((start, end)) => p.timestamp >= start && p.timestamp <= end,
                None => true,
            })
            .collect()
    }

    pub fn window_len(&self, device_key: &str, metric: Metric) -> usize {
        self.windows
            .get(&(device_key.to_string(), metric))
            .map_or(0, |w| w.len())
    }
}
