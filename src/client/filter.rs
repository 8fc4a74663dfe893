// Alert history with two-phase (preview/apply) multi-field filtering.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use crate::models::{AlertEvent, Severity, SignalType};

/// Conjunctive predicates over alert fields; `None` means match-all.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Substring match on the component/location field.
    pub component: Option<String>,
    pub signal_type: Option<SignalType>,
    pub alert_level: Option<Severity>,
    /// Exclusive bounds on the parsed event time.
    pub time_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    /// Case-sensitive substring over the string fields (device name,
    /// component, signal-type label).
    pub keyword: Option<String>,
}

/// Append-only alert history (newest first, capped) plus the active filtered
/// view the UI renders from.
#[derive(Debug, Clone)]
pub struct AlertFeed {
    history: VecDeque<AlertEvent>,
    active: Vec<AlertEvent>,
    cap: usize,
    next_key: u64,
}

impl AlertFeed {
    pub fn new(cap: usize) -> Self {
        AlertFeed {
            history: VecDeque::with_capacity(cap),
            active: Vec::new(),
            cap,
            next_key: 0,
        }
    }

    /// Ingests one tick's batch: assigns UI keys, prepends in batch order,
    /// evicts the oldest beyond the cap, and refreshes the active view to the
    /// full history (a pending filter stays pending until applied again).
    pub fn ingest_batch(&mut self, batch: Vec<AlertEvent>) {
        for mut event in batch.into_iter().rev() {
            event.key = format!("evt-{}", self.next_key);
            self.next_key += 1;
            self.history.push_front(event);
        }
        while self.history.len() > self.cap {
            self.history.pop_back();
        }
        self.active = self.history.iter().cloned().collect();
    }

    pub fn history(&self) -> impl Iterator<Item = &AlertEvent> {
        self.history.iter()
    }

    pub fn active(&self) -> &[AlertEvent] {
        &self.active
    }

    /// Evaluates the criteria over the full history and returns the candidate
    /// result without touching the active view. The caller commits it with
    /// [`AlertFeed::apply`].
    pub fn preview(&self, criteria: &FilterCriteria) -> Vec<AlertEvent> {
        self.history
            .iter()
            .filter(|event| matches(event, criteria))
            .cloned()
            .collect()
    }

    /// Replaces the active view with a previously previewed candidate.
    pub fn apply(&mut self, candidate: Vec<AlertEvent>) {
        self.active = candidate;
    }

    /// Restores the unfiltered view.
    pub fn reset(&mut self) {
        self.active = self.history.iter().cloned().collect();
    }
}

fn matches(event: &AlertEvent, criteria: &FilterCriteria) -> bool {
    if let Some(component) = &criteria.component
        && !component.is_empty()
        && !event.component.contains(component.as_str())
    {
        return false;
    }
    if let Some(signal_type) = criteria.signal_type
        && event.signal_type != signal_type
    {
        return false;
    }
    if let Some(level) = criteria.alert_level
        && event.alert_level != level
    {
        return false;
    }
    if let Some((start, end)) = criteria.time_range {
        // Unparseable event times never match a range-constrained filter.
        match DateTime::parse_from_rfc3339(&event.time) {
            Ok(t) => {
                let t = t.with_timezone(&Utc);
                if !(t > start && t < end) {
                    return false;
                }
            }
            Err(_) => return false,
        }
    }
    if let Some(keyword) = &criteria.keyword
        && !keyword.is_empty()
    {
        let hit = event.device_name.contains(keyword.as_str())
            || event.component.contains(keyword.as_str())
            || event.signal_type.label().contains(keyword.as_str());
        if !hit {
            return false;
        }
    }
    true
}
