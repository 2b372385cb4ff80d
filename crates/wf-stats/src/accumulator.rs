//! Combined statistics over a spin sequence

use log::debug;
use serde::{Deserialize, Serialize};

use wf_core::{WfError, WfResult, WheelNumber};

use crate::color::{ColorStats, ColorTracker};
use crate::dozen::{ColumnStats, ColumnTracker, DozenStats, DozenTracker};
use crate::frequency::{FrequencyTracker, NumberFrequency};
use crate::range::{RangeStats, RangeTracker};
use crate::sector::{SectorStats, SectorTracker};
use crate::streak::{StreakAnalysis, StreakTracker};
use crate::tracker::SpinTracker;

/// Every derived view of one sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_spins: usize,
    pub colors: ColorStats,
    /// All 37 numbers, most frequent first
    pub numbers: Vec<NumberFrequency>,
    pub dozens: DozenStats,
    pub columns: ColumnStats,
    pub ranges: RangeStats,
    pub sectors: SectorStats,
    pub streaks: StreakAnalysis,
}

impl Statistics {
    /// Frequency record for one number
    pub fn frequency_of(&self, n: WheelNumber) -> Option<&NumberFrequency> {
        self.numbers.iter().find(|f| f.number == n)
    }

    /// Gap for one number; the sequence length when it never landed
    pub fn gap_of(&self, n: WheelNumber) -> usize {
        self.frequency_of(n).map_or(self.total_spins, |f| f.gap)
    }

    pub fn most_frequent(&self, k: usize) -> &[NumberFrequency] {
        &self.numbers[..k.min(self.numbers.len())]
    }
}

/// Feeds every tracker in a single pass.
///
/// Spins can be added one at a time; [`snapshot`](Self::snapshot) yields the
/// same values a batch [`compute_statistics`] over the spins seen so far would.
#[derive(Debug, Clone, Default)]
pub struct StatisticsAccumulator {
    total: usize,
    colors: ColorTracker,
    numbers: FrequencyTracker,
    dozens: DozenTracker,
    columns: ColumnTracker,
    ranges: RangeTracker,
    sectors: SectorTracker,
    streaks: StreakTracker,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, n: WheelNumber) {
        self.total += 1;
        self.colors.observe(n);
        self.numbers.observe(n);
        self.dozens.observe(n);
        self.columns.observe(n);
        self.ranges.observe(n);
        self.sectors.observe(n);
        self.streaks.observe(n);
    }

    pub fn extend<'a, I>(&mut self, spins: I)
    where
        I: IntoIterator<Item = &'a WheelNumber>,
    {
        for &n in spins {
            self.push(n);
        }
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn snapshot(&self) -> WfResult<Statistics> {
        if self.total == 0 {
            return Err(WfError::EmptySequence);
        }
        let total = self.total;
        Ok(Statistics {
            total_spins: total,
            colors: self.colors.finish(total),
            numbers: self.numbers.finish(total),
            dozens: self.dozens.finish(total),
            columns: self.columns.finish(total),
            ranges: self.ranges.finish(total),
            sectors: self.sectors.finish(total),
            streaks: self.streaks.finish(total),
        })
    }
}

/// Reduce a finished sequence to its statistics.
///
/// Fails with `EmptySequence` on empty input.
pub fn compute_statistics(spins: &[WheelNumber]) -> WfResult<Statistics> {
    let mut acc = StatisticsAccumulator::new();
    acc.extend(spins);
    let stats = acc.snapshot()?;
    debug!("Computed statistics over {} spins", stats.total_spins);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wf_core::{Dozen, Sector};

    fn numbers(values: &[u8]) -> Vec<WheelNumber> {
        values.iter().map(|&v| WheelNumber::new(v).unwrap()).collect()
    }

    fn n(v: u8) -> WheelNumber {
        WheelNumber::new(v).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(compute_statistics(&[]), Err(WfError::EmptySequence)));
        assert!(StatisticsAccumulator::new().snapshot().is_err());
    }

    #[test]
    fn test_wheel_slice_scenario() {
        let stats = compute_statistics(&numbers(&[0, 32, 15, 19, 4, 21, 2, 25, 17, 34])).unwrap();

        let zero = stats.frequency_of(WheelNumber::ZERO).unwrap();
        assert_eq!(zero.count, 1);
        assert_relative_eq!(zero.percentage, 10.0);
        assert_eq!(zero.last_seen, Some(0));
        assert_eq!(zero.gap, 9);

        assert_eq!(stats.colors.red.count, 5);
        assert_eq!(stats.colors.black.count, 4);
        assert_eq!(stats.colors.green.count, 1);
        assert_eq!(stats.dozens.zero.count, 1);
        assert_eq!(stats.total_spins, 10);
    }

    #[test]
    fn test_single_spin() {
        let stats = compute_statistics(&numbers(&[17])).unwrap();
        let seventeen = stats.frequency_of(n(17)).unwrap();
        assert_eq!(seventeen.count, 1);
        assert_relative_eq!(seventeen.percentage, 100.0);
        assert_eq!(seventeen.gap, 0);
        assert_eq!(stats.numbers[0].number, n(17));
        assert_eq!(stats.gap_of(n(3)), 1);
    }

    #[test]
    fn test_ordering_desc_count_then_number() {
        let stats = compute_statistics(&numbers(&[5, 5, 3, 3, 9, 36])).unwrap();
        let head: Vec<u8> = stats.numbers.iter().take(4).map(|f| f.number.value()).collect();
        assert_eq!(head, vec![3, 5, 9, 36]);
        let tail: Vec<u8> = stats.numbers[4..].iter().map(|f| f.number.value()).collect();
        assert!(tail.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(stats.numbers.len(), 37);
    }

    #[test]
    fn test_gaps() {
        let spins = numbers(&[1, 2, 3, 1, 4]);
        let stats = compute_statistics(&spins).unwrap();
        assert_eq!(stats.gap_of(n(4)), 0);
        assert_eq!(stats.gap_of(n(1)), 1);
        assert_eq!(stats.gap_of(n(2)), 3);
        assert_eq!(stats.gap_of(n(30)), 5);
        assert_eq!(stats.frequency_of(n(30)).unwrap().last_seen, None);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let spins = numbers(&[0, 1, 2, 13, 14, 25, 36, 0, 7, 22, 31, 18]);
        let stats = compute_statistics(&spins).unwrap();

        let c = &stats.colors;
        assert_relative_eq!(c.red.percentage + c.black.percentage + c.green.percentage, 100.0, epsilon = 1e-9);

        let d = &stats.dozens;
        assert_relative_eq!(
            d.first.percentage + d.second.percentage + d.third.percentage + d.zero.percentage,
            100.0,
            epsilon = 1e-9
        );

        let col = &stats.columns;
        assert_relative_eq!(
            col.column1.percentage + col.column2.percentage + col.column3.percentage + d.zero.percentage,
            100.0,
            epsilon = 1e-9
        );

        let total: f64 = stats.numbers.iter().map(|f| f.percentage).sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ranges_exclude_zero() {
        let stats = compute_statistics(&numbers(&[0, 0, 1, 19, 20, 18])).unwrap();
        let r = &stats.ranges;
        assert_eq!(r.low.count, 2);
        assert_eq!(r.high.count, 2);
        assert_eq!(r.odd.count, 2);
        assert_eq!(r.even.count, 2);
        assert_relative_eq!(r.low.percentage + r.high.percentage, 100.0 * 4.0 / 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sectors_overlap() {
        // 0 is in both Voisins and the Zero Game
        let stats = compute_statistics(&numbers(&[0])).unwrap();
        assert_eq!(stats.sectors.get(Sector::Voisins).count, 1);
        assert_eq!(stats.sectors.get(Sector::ZeroGame).count, 1);
        assert_eq!(stats.sectors.tiers.count, 0);
        assert_eq!(stats.sectors.orphelins.count, 0);
    }

    #[test]
    fn test_dozen_longest_run() {
        let stats = compute_statistics(&numbers(&[1, 2, 3, 0, 4, 13, 5, 6])).unwrap();
        assert_eq!(stats.dozens.get(Dozen::First).streak, 3);
        assert_eq!(stats.dozens.get(Dozen::First).count, 6);
        assert_eq!(stats.dozens.second.streak, 1);
        assert_eq!(stats.dozens.third.streak, 0);
    }

    #[test]
    fn test_accumulator_matches_batch() {
        let spins = numbers(&[3, 26, 0, 32, 15, 15, 15, 8, 30, 11, 36, 13, 27]);
        let mut acc = StatisticsAccumulator::new();
        for (i, &spin) in spins.iter().enumerate() {
            acc.push(spin);
            assert_eq!(acc.snapshot().unwrap(), compute_statistics(&spins[..=i]).unwrap());
        }
        assert_eq!(acc.len(), spins.len());
    }

    #[test]
    fn test_deterministic() {
        let spins = numbers(&[12, 35, 3, 26, 0, 32, 15, 19, 4, 21]);
        assert_eq!(compute_statistics(&spins).unwrap(), compute_statistics(&spins).unwrap());
    }

    #[test]
    fn test_serializes_numbers_as_integers() {
        let stats = compute_statistics(&numbers(&[7])).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["numbers"][0]["number"], 7);
        assert_eq!(json["total_spins"], 1);
    }
}
