//! wf-predict: Heuristic prediction engine for WheelForge
//!
//! Combines the statistics of a finished run with recent spins and wheel
//! topology into five ranked candidates, hot and cold lists and a neighbor
//! set. Outputs are for entertainment; a fair wheel is memoryless.

pub mod analysis;
pub mod engine;
pub mod history;
pub mod neighbors;
pub mod reason;

pub use analysis::{RecentCounts, cold_numbers, hot_numbers};
pub use engine::*;
pub use history::*;
pub use neighbors::*;
pub use reason::*;
