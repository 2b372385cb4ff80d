//! Low/high and odd/even counts
//!
//! Zero is in none of the four buckets, but percentages still divide by all
//! spins, so each pair sums to the non-zero share rather than 100.

use serde::{Deserialize, Serialize};

use wf_core::WheelNumber;

use crate::tracker::{CountStat, SpinTracker};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeStats {
    /// 1-18
    pub low: CountStat,
    /// 19-36
    pub high: CountStat,
    pub odd: CountStat,
    pub even: CountStat,
}

#[derive(Debug, Clone, Default)]
pub struct RangeTracker {
    low: usize,
    high: usize,
    odd: usize,
    even: usize,
}

impl SpinTracker for RangeTracker {
    type Output = RangeStats;

    fn observe(&mut self, n: WheelNumber) {
        if n.is_zero() {
            return;
        }
        if n.is_low() {
            self.low += 1;
        } else {
            self.high += 1;
        }
        if n.is_odd() {
            self.odd += 1;
        } else {
            self.even += 1;
        }
    }

    fn finish(&self, total: usize) -> RangeStats {
        RangeStats {
            low: CountStat::new(self.low, total),
            high: CountStat::new(self.high, total),
            odd: CountStat::new(self.odd, total),
            even: CountStat::new(self.even, total),
        }
    }
}
