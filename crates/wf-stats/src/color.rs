//! Red / black / green distribution

use serde::{Deserialize, Serialize};

use wf_core::{Color, WheelNumber};

use crate::tracker::{CountStat, SpinTracker};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStats {
    pub red: CountStat,
    pub black: CountStat,
    pub green: CountStat,
}

impl ColorStats {
    pub fn get(&self, color: Color) -> CountStat {
        match color {
            Color::Red => self.red,
            Color::Black => self.black,
            Color::Green => self.green,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColorTracker {
    red: usize,
    black: usize,
    green: usize,
}

impl SpinTracker for ColorTracker {
    type Output = ColorStats;

    fn observe(&mut self, n: WheelNumber) {
        match n.color() {
            Color::Red => self.red += 1,
            Color::Black => self.black += 1,
            Color::Green => self.green += 1,
        }
    }

    fn finish(&self, total: usize) -> ColorStats {
        ColorStats {
            red: CountStat::new(self.red, total),
            black: CountStat::new(self.black, total),
            green: CountStat::new(self.green, total),
        }
    }
}
