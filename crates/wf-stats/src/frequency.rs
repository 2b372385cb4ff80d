//! Per-number frequency and gap

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use wf_core::{POCKET_COUNT, WheelNumber};

use crate::tracker::{SpinTracker, percentage};

/// Frequency record for one number
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberFrequency {
    pub number: WheelNumber,
    pub count: usize,
    pub percentage: f64,
    /// Index of the most recent occurrence, `None` if never seen
    pub last_seen: Option<usize>,
    /// Spins since the most recent occurrence; the sequence length if never seen
    pub gap: usize,
}

/// Counts and last-seen index for all 37 numbers
#[derive(Debug, Clone)]
pub struct FrequencyTracker {
    counts: [usize; POCKET_COUNT],
    last_seen: [Option<usize>; POCKET_COUNT],
    position: usize,
}

impl Default for FrequencyTracker {
    fn default() -> Self {
        Self {
            counts: [0; POCKET_COUNT],
            last_seen: [None; POCKET_COUNT],
            position: 0,
        }
    }
}

impl SpinTracker for FrequencyTracker {
    /// Sorted by descending count, ties by ascending number
    type Output = Vec<NumberFrequency>;

    fn observe(&mut self, n: WheelNumber) {
        self.counts[n.index()] += 1;
        self.last_seen[n.index()] = Some(self.position);
        self.position += 1;
    }

    fn finish(&self, total: usize) -> Vec<NumberFrequency> {
        let mut frequencies: Vec<NumberFrequency> = WheelNumber::all()
            .map(|number| {
                let count = self.counts[number.index()];
                let last_seen = self.last_seen[number.index()];
                NumberFrequency {
                    number,
                    count,
                    percentage: percentage(count, total),
                    last_seen,
                    gap: match last_seen {
                        Some(index) => total - 1 - index,
                        None => total,
                    },
                }
            })
            .collect();

        frequencies.sort_by_key(|f| (Reverse(f.count), f.number));
        frequencies
    }
}
