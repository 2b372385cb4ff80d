//! wf-stats: Statistics engine for WheelForge
//!
//! Reduces a finished spin sequence to seven independent views:
//! - Color distribution (red / black / green)
//! - Per-number frequency, last-seen index and gap
//! - Dozens with longest runs, plus zero
//! - Columns
//! - Low/high and odd/even
//! - Racetrack sectors (overlapping)
//! - Streaks for red, black, odd, even and each dozen
//!
//! Each view is a [`SpinTracker`]; [`StatisticsAccumulator`] feeds them all
//! in one pass and [`compute_statistics`] is the batch entry point.

pub mod accumulator;
pub mod color;
pub mod dozen;
pub mod frequency;
pub mod range;
pub mod sector;
pub mod streak;
pub mod tracker;

pub use accumulator::*;
pub use color::*;
pub use dozen::*;
pub use frequency::*;
pub use range::*;
pub use sector::*;
pub use streak::*;
pub use tracker::*;
