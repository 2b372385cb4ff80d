//! Hot/cold selection and recent-window counts

use wf_core::{POCKET_COUNT, WheelNumber};
use wf_stats::Statistics;

/// Spins considered "recent" for burst and hot scoring
pub const RECENT_WINDOW: usize = 20;

/// Hot and cold lists are computed this long, then cut for display
pub const HOT_COLD_LIMIT: usize = 10;

/// Minimum gap for a number to count as cold
pub const COLD_GAP: usize = 10;

/// Per-number occurrences over the last [`RECENT_WINDOW`] spins, remembering
/// the order in which numbers first appeared in the window.
#[derive(Debug, Clone)]
pub struct RecentCounts {
    counts: [usize; POCKET_COUNT],
    order: Vec<WheelNumber>,
}

impl RecentCounts {
    pub fn new(recent: &[WheelNumber]) -> Self {
        let window = &recent[recent.len().saturating_sub(RECENT_WINDOW)..];
        let mut counts = [0; POCKET_COUNT];
        let mut order = Vec::new();
        for &n in window {
            if counts[n.index()] == 0 {
                order.push(n);
            }
            counts[n.index()] += 1;
        }
        Self { counts, order }
    }

    #[inline]
    pub fn get(&self, n: WheelNumber) -> usize {
        self.counts[n.index()]
    }

    /// `(number, count)` in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (WheelNumber, usize)> + '_ {
        self.order.iter().map(|&n| (n, self.counts[n.index()]))
    }
}

/// Top numbers by `percentage * 0.5 + recent_count * 50`.
///
/// Ties keep the statistics order (most frequent first).
pub fn hot_numbers(stats: &Statistics, recent: &RecentCounts) -> Vec<WheelNumber> {
    let mut scored: Vec<(WheelNumber, f64)> = stats
        .numbers
        .iter()
        .map(|f| (f.number, f.percentage * 0.5 + recent.get(f.number) as f64 * 50.0))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.into_iter().take(HOT_COLD_LIMIT).map(|(n, _)| n).collect()
}

/// Numbers with a gap above [`COLD_GAP`], longest gap first
pub fn cold_numbers(stats: &Statistics) -> Vec<WheelNumber> {
    let mut cold: Vec<_> = stats.numbers.iter().filter(|f| f.gap > COLD_GAP).collect();
    cold.sort_by(|a, b| b.gap.cmp(&a.gap));
    cold.into_iter().take(HOT_COLD_LIMIT).map(|f| f.number).collect()
}
