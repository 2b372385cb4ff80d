//! Simulation configuration

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use wf_core::{WfError, WfResult};

/// Preset simulation sizes offered by front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum SimulationSize {
    Spins10K = 10_000,
    Spins150K = 150_000,
    Spins350K = 350_000,
    Spins500K = 500_000,
    Spins1M = 1_000_000,
}

impl SimulationSize {
    pub const ALL: [SimulationSize; 5] = [
        SimulationSize::Spins10K,
        SimulationSize::Spins150K,
        SimulationSize::Spins350K,
        SimulationSize::Spins500K,
        SimulationSize::Spins1M,
    ];

    #[inline]
    pub fn as_usize(self) -> usize {
        self as u32 as usize
    }

    /// Short label ("10K", "1M")
    pub fn label(self) -> &'static str {
        match self {
            SimulationSize::Spins10K => "10K",
            SimulationSize::Spins150K => "150K",
            SimulationSize::Spins350K => "350K",
            SimulationSize::Spins500K => "500K",
            SimulationSize::Spins1M => "1M",
        }
    }
}

impl Default for SimulationSize {
    fn default() -> Self {
        Self::Spins10K
    }
}

impl fmt::Display for SimulationSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SimulationSize {
    type Err = WfError;

    fn from_str(s: &str) -> WfResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WfError::Config(format!("unknown simulation preset: {s}")))
    }
}

/// Configuration for simulation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of spins per run
    pub size: usize,

    /// Runs of at least this many spins go to a background worker
    pub background_threshold: usize,

    /// Approximate number of progress callbacks per run
    pub progress_steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: SimulationSize::Spins10K.as_usize(),
            background_threshold: SimulationSize::Spins150K.as_usize(),
            progress_steps: 100,
        }
    }
}

impl SimulationConfig {
    /// Create a config for one of the preset sizes
    pub fn preset(size: SimulationSize) -> Self {
        Self {
            size: size.as_usize(),
            ..Default::default()
        }
    }

    /// Keep everything on the calling thread regardless of size
    pub fn foreground() -> Self {
        Self {
            background_threshold: usize::MAX,
            ..Default::default()
        }
    }

    /// Builder: set run size
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Builder: set background threshold
    pub fn with_background_threshold(mut self, threshold: usize) -> Self {
        self.background_threshold = threshold;
        self
    }

    /// Builder: set progress cadence
    pub fn with_progress_steps(mut self, steps: usize) -> Self {
        self.progress_steps = steps;
        self
    }

    /// Whether a run of `size` spins should leave the calling thread
    pub fn runs_in_background(&self, size: usize) -> bool {
        size >= self.background_threshold
    }

    pub fn validate(&self) -> WfResult<()> {
        if self.size == 0 {
            return Err(WfError::InvalidSimulationSize(0));
        }
        if self.progress_steps == 0 {
            return Err(WfError::Config("progress_steps must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> WfResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WfError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> WfResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded simulation config from {}", path.as_ref().display());
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> WfResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WfError::Serialization(e.to_string()))
    }
}

/// Spins between progress callbacks for a run of `size` spins
#[inline]
pub fn progress_interval(size: usize, steps: usize) -> usize {
    (size / steps.max(1)).max(1)
}
