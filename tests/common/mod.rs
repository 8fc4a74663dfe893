// Shared test helpers: scripted value source for deterministic generation

use pumpmon::generator::ValueSource;
use std::collections::VecDeque;

/// Replays pre-seeded values instead of drawing random ones, so generator and
/// classifier behavior can be pinned exactly.
#[derive(Default)]
pub struct ScriptedSource {
    pub values: VecDeque<i64>,
    pub chances: VecDeque<bool>,
    pub picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn with_values(values: &[i64]) -> Self {
        ScriptedSource {
            values: values.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl ValueSource for ScriptedSource {
    fn value_in(&mut self, lo: i64, _hi: i64) -> i64 {
        self.values.pop_front().unwrap_or(lo)
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(true)
    }

    fn pick(&mut self, _len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0)
    }
}
