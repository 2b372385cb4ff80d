//! Dozen and column distribution

use serde::{Deserialize, Serialize};

use wf_core::{Column, Dozen, WheelNumber};

use crate::tracker::{CountStat, SpinTracker};

/// Dozen bucket with its longest uninterrupted run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DozenCount {
    pub count: usize,
    pub percentage: f64,
    /// Longest consecutive run of spins in this dozen
    pub streak: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DozenStats {
    pub first: DozenCount,
    pub second: DozenCount,
    pub third: DozenCount,
    pub zero: CountStat,
}

impl DozenStats {
    pub fn get(&self, dozen: Dozen) -> DozenCount {
        match dozen {
            Dozen::First => self.first,
            Dozen::Second => self.second,
            Dozen::Third => self.third,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DozenTracker {
    counts: [usize; 3],
    zero: usize,
    running: [usize; 3],
    longest: [usize; 3],
}

impl SpinTracker for DozenTracker {
    type Output = DozenStats;

    fn observe(&mut self, n: WheelNumber) {
        match n.dozen() {
            None => {
                self.zero += 1;
                self.running = [0; 3];
            }
            Some(dozen) => {
                let i = dozen.index();
                self.counts[i] += 1;
                for (slot, run) in self.running.iter_mut().enumerate() {
                    *run = if slot == i { *run + 1 } else { 0 };
                }
                self.longest[i] = self.longest[i].max(self.running[i]);
            }
        }
    }

    fn finish(&self, total: usize) -> DozenStats {
        let bucket = |dozen: Dozen| {
            let i = dozen.index();
            let stat = CountStat::new(self.counts[i], total);
            DozenCount {
                count: stat.count,
                percentage: stat.percentage,
                streak: self.longest[i],
            }
        };

        DozenStats {
            first: bucket(Dozen::First),
            second: bucket(Dozen::Second),
            third: bucket(Dozen::Third),
            zero: CountStat::new(self.zero, total),
        }
    }
}

/// Column distribution; zero belongs to no column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub column1: CountStat,
    pub column2: CountStat,
    pub column3: CountStat,
}

impl ColumnStats {
    pub fn get(&self, column: Column) -> CountStat {
        match column {
            Column::First => self.column1,
            Column::Second => self.column2,
            Column::Third => self.column3,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColumnTracker {
    counts: [usize; 3],
}

impl SpinTracker for ColumnTracker {
    type Output = ColumnStats;

    fn observe(&mut self, n: WheelNumber) {
        if let Some(column) = n.column() {
            self.counts[column.index()] += 1;
        }
    }

    fn finish(&self, total: usize) -> ColumnStats {
        ColumnStats {
            column1: CountStat::new(self.counts[0], total),
            column2: CountStat::new(self.counts[1], total),
            column3: CountStat::new(self.counts[2], total),
        }
    }
}
