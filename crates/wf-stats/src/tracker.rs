//! Per-view spin trackers

use serde::{Deserialize, Serialize};

use wf_core::WheelNumber;

/// One statistics view, fed spin by spin in generation order.
///
/// `finish` must not disturb the tracker so a live accumulator can snapshot
/// mid-stream and keep going.
pub trait SpinTracker {
    type Output;

    /// Record the next spin
    fn observe(&mut self, n: WheelNumber);

    /// Produce the view for a sequence of `total` spins
    fn finish(&self, total: usize) -> Self::Output;
}

/// Count with its share of all spins
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CountStat {
    pub count: usize,
    /// `count / total * 100`, total including zero spins
    pub percentage: f64,
}

impl CountStat {
    pub fn new(count: usize, total: usize) -> Self {
        Self {
            count,
            percentage: percentage(count, total),
        }
    }
}

#[inline]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
