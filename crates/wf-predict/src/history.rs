//! Bounded record of observed spins

use serde::{Deserialize, Serialize};

use wf_core::{WfResult, WheelNumber};

/// Default number of spins kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Ordered spins entered by hand or observed at a table, oldest first.
///
/// Once full, each push evicts the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinHistory {
    spins: Vec<WheelNumber>,
    capacity: usize,
}

impl SpinHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Capacity is at least one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            spins: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, n: WheelNumber) {
        if self.spins.len() == self.capacity {
            self.spins.remove(0);
        }
        self.spins.push(n);
    }

    /// Validate and record a raw value
    pub fn push_value(&mut self, value: u8) -> WfResult<WheelNumber> {
        let n = WheelNumber::new(value)?;
        self.push(n);
        Ok(n)
    }

    /// The last `n` spins, oldest first
    pub fn recent(&self, n: usize) -> &[WheelNumber] {
        &self.spins[self.spins.len().saturating_sub(n)..]
    }

    pub fn latest(&self) -> Option<WheelNumber> {
        self.spins.last().copied()
    }

    pub fn as_slice(&self) -> &[WheelNumber] {
        &self.spins
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.spins.clear();
    }
}

impl Default for SpinHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<WheelNumber> for SpinHistory {
    fn extend<I: IntoIterator<Item = WheelNumber>>(&mut self, iter: I) {
        for n in iter {
            self.push(n);
        }
    }
}
