//! Reasoning tags attached to predictions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a number was ranked.
///
/// Serialized as the human-readable tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    #[serde(rename = "Physical neighbor on wheel")]
    PhysicalNeighbor,
    #[serde(rename = "Mathematical neighbor")]
    MathematicalNeighbor,
    #[serde(rename = "Hot number (frequent recently)")]
    HotNumber,
    #[serde(rename = "High recent frequency")]
    HighRecentFrequency,
    #[serde(rename = "Due to appear (long gap)")]
    Due,
    #[serde(rename = "Statistical analysis")]
    StatisticalAnalysis,
    #[serde(rename = "Most frequent in simulation")]
    MostFrequent,
    #[serde(rename = "Random selection")]
    RandomSelection,
}

impl Reason {
    pub const ALL: [Reason; 8] = [
        Reason::PhysicalNeighbor,
        Reason::MathematicalNeighbor,
        Reason::HotNumber,
        Reason::HighRecentFrequency,
        Reason::Due,
        Reason::StatisticalAnalysis,
        Reason::MostFrequent,
        Reason::RandomSelection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Reason::PhysicalNeighbor => "Physical neighbor on wheel",
            Reason::MathematicalNeighbor => "Mathematical neighbor",
            Reason::HotNumber => "Hot number (frequent recently)",
            Reason::HighRecentFrequency => "High recent frequency",
            Reason::Due => "Due to appear (long gap)",
            Reason::StatisticalAnalysis => "Statistical analysis",
            Reason::MostFrequent => "Most frequent in simulation",
            Reason::RandomSelection => "Random selection",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
