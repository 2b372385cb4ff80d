//! Streak analysis
//!
//! Single pass with running counters. Red/black and odd/even runs break on
//! the opposite category or on zero. A dozen run is committed to its own
//! bucket when the dozen changes, when zero lands, and once more at the end.

use serde::{Deserialize, Serialize};

use wf_core::{Color, Dozen, Parity, WheelNumber};

use crate::tracker::SpinTracker;

/// Run length at the end of the sequence and the longest seen.
///
/// Always `longest >= current`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: usize,
    pub longest: usize,
}

impl Streak {
    #[inline]
    fn extend(&mut self) {
        self.current += 1;
        self.longest = self.longest.max(self.current);
    }

    #[inline]
    fn reset(&mut self) {
        self.current = 0;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DozenStreaks {
    pub first: Streak,
    pub second: Streak,
    pub third: Streak,
}

impl DozenStreaks {
    pub fn get(&self, dozen: Dozen) -> Streak {
        match dozen {
            Dozen::First => self.first,
            Dozen::Second => self.second,
            Dozen::Third => self.third,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakAnalysis {
    pub red: Streak,
    pub black: Streak,
    pub odd: Streak,
    pub even: Streak,
    pub dozens: DozenStreaks,
}

#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    red: Streak,
    black: Streak,
    odd: Streak,
    even: Streak,
    /// Dozen of the open run, `None` after zero or before the first spin
    dozen: Option<Dozen>,
    run: usize,
    dozen_longest: [usize; 3],
}

fn commit_run(longest: &mut [usize; 3], dozen: Option<Dozen>, run: usize) {
    if let Some(dozen) = dozen {
        let slot = &mut longest[dozen.index()];
        *slot = (*slot).max(run);
    }
}

impl SpinTracker for StreakTracker {
    type Output = StreakAnalysis;

    fn observe(&mut self, n: WheelNumber) {
        match n.color() {
            Color::Red => {
                self.red.extend();
                self.black.reset();
            }
            Color::Black => {
                self.black.extend();
                self.red.reset();
            }
            Color::Green => {
                self.red.reset();
                self.black.reset();
            }
        }

        match n.parity() {
            Some(Parity::Odd) => {
                self.odd.extend();
                self.even.reset();
            }
            Some(Parity::Even) => {
                self.even.extend();
                self.odd.reset();
            }
            None => {
                self.odd.reset();
                self.even.reset();
            }
        }

        let dozen = n.dozen();
        if dozen.is_some() && dozen == self.dozen {
            self.run += 1;
        } else {
            commit_run(&mut self.dozen_longest, self.dozen, self.run);
            self.dozen = dozen;
            self.run = usize::from(dozen.is_some());
        }
    }

    fn finish(&self, _total: usize) -> StreakAnalysis {
        let mut longest = self.dozen_longest;
        commit_run(&mut longest, self.dozen, self.run);

        let streak = |dozen: Dozen| Streak {
            current: if self.dozen == Some(dozen) { self.run } else { 0 },
            longest: longest[dozen.index()],
        };

        StreakAnalysis {
            red: self.red,
            black: self.black,
            odd: self.odd,
            even: self.even,
            dozens: DozenStreaks {
                first: streak(Dozen::First),
                second: streak(Dozen::Second),
                third: streak(Dozen::Third),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyse(values: &[u8]) -> StreakAnalysis {
        let mut tracker = StreakTracker::default();
        for &v in values {
            tracker.observe(WheelNumber::new(v).unwrap());
        }
        tracker.finish(values.len())
    }

    #[test]
    fn test_color_runs() {
        // red red red black red
        let s = analyse(&[1, 3, 5, 2, 7]);
        assert_eq!(s.red, Streak { current: 1, longest: 3 });
        assert_eq!(s.black, Streak { current: 0, longest: 1 });
    }

    #[test]
    fn test_zero_breaks_color_and_parity() {
        let s = analyse(&[1, 3, 0]);
        assert_eq!(s.red.current, 0);
        assert_eq!(s.red.longest, 2);
        assert_eq!(s.odd.current, 0);
        assert_eq!(s.odd.longest, 2);
    }

    #[test]
    fn test_parity_runs() {
        let s = analyse(&[2, 4, 6, 8, 1, 3]);
        assert_eq!(s.even, Streak { current: 0, longest: 4 });
        assert_eq!(s.odd, Streak { current: 2, longest: 2 });
    }

    #[test]
    fn test_dozen_runs_commit_on_change_and_zero() {
        // first x3, second x1, zero, first x2
        let s = analyse(&[1, 5, 12, 13, 0, 2, 3]);
        assert_eq!(s.dozens.first, Streak { current: 2, longest: 3 });
        assert_eq!(s.dozens.second, Streak { current: 0, longest: 1 });
        assert_eq!(s.dozens.third, Streak::default());
    }

    #[test]
    fn test_trailing_dozen_run_committed() {
        let s = analyse(&[1, 25, 26, 27, 28]);
        assert_eq!(s.dozens.third, Streak { current: 4, longest: 4 });
        assert_eq!(s.dozens.first.current, 0);
    }

    #[test]
    fn test_trailing_zero_clears_dozen_current() {
        let s = analyse(&[13, 14, 0]);
        assert_eq!(s.dozens.second, Streak { current: 0, longest: 2 });
    }

    #[test]
    fn test_longest_never_below_current() {
        let s = analyse(&[19, 21, 0, 32, 32, 32, 15, 4, 2, 36, 36]);
        for streak in [s.red, s.black, s.odd, s.even, s.dozens.first, s.dozens.second, s.dozens.third] {
            assert!(streak.longest >= streak.current);
        }
    }
}
