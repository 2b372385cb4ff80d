//! Spin sequences and run envelopes

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use wf_core::{WfResult, WheelNumber};

/// Ordered spins from one run, in generation order.
///
/// Only the runner appends; once handed out the sequence is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpinSequence(Vec<WheelNumber>);

impl SpinSequence {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    #[inline]
    pub(crate) fn push(&mut self, n: WheelNumber) {
        self.0.push(n);
    }

    /// Wrap already-recorded spins (replays, fixtures, manual entry)
    pub fn from_spins(spins: Vec<WheelNumber>) -> Self {
        Self(spins)
    }

    /// Build from raw values, rejecting anything outside 0-36
    pub fn from_values(values: &[u8]) -> WfResult<Self> {
        values
            .iter()
            .map(|&v| WheelNumber::new(v))
            .collect::<WfResult<Vec<_>>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[WheelNumber] {
        &self.0
    }

    /// The last `n` spins, oldest first
    pub fn recent(&self, n: usize) -> &[WheelNumber] {
        &self.0[self.0.len().saturating_sub(n)..]
    }

    pub fn into_vec(self) -> Vec<WheelNumber> {
        self.0
    }
}

impl Deref for SpinSequence {
    type Target = [WheelNumber];

    fn deref(&self) -> &[WheelNumber] {
        &self.0
    }
}

impl AsRef<[WheelNumber]> for SpinSequence {
    fn as_ref(&self) -> &[WheelNumber] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a SpinSequence {
    type Item = &'a WheelNumber;
    type IntoIter = std::slice::Iter<'a, WheelNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A finished simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub spins: SpinSequence,
    pub total_spins: usize,
    /// Completion time, Unix milliseconds
    pub timestamp_ms: i64,
}

impl SimulationResult {
    pub fn new(spins: SpinSequence) -> Self {
        Self {
            total_spins: spins.len(),
            spins,
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Progress snapshot for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationProgress {
    pub current: usize,
    pub total: usize,
    /// 0-100
    pub percentage: f64,
    pub is_complete: bool,
}

impl SimulationProgress {
    pub fn new(current: usize, total: usize) -> Self {
        let percentage = if total > 0 {
            current as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            current,
            total,
            percentage,
            is_complete: false,
        }
    }

    pub fn completed(total: usize) -> Self {
        Self {
            is_complete: true,
            ..Self::new(total, total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_validates() {
        let seq = SpinSequence::from_values(&[0, 17, 36]).unwrap();
        assert_eq!(seq.len(), 3);
        assert!(SpinSequence::from_values(&[1, 37]).is_err());
    }

    #[test]
    fn test_recent_window() {
        let seq = SpinSequence::from_values(&[1, 2, 3, 4, 5]).unwrap();
        let tail: Vec<u8> = seq.recent(2).iter().map(|n| n.value()).collect();
        assert_eq!(tail, vec![4, 5]);
        assert_eq!(seq.recent(50).len(), 5);
        assert!(seq.recent(0).is_empty());
    }

    #[test]
    fn test_result_envelope() {
        let result = SimulationResult::new(SpinSequence::from_values(&[3, 5]).unwrap());
        assert_eq!(result.total_spins, 2);
        assert!(result.timestamp_ms > 0);
    }

    #[test]
    fn test_progress_percentage() {
        let p = SimulationProgress::new(25, 100);
        assert_eq!(p.percentage, 25.0);
        assert!(!p.is_complete);
        let done = SimulationProgress::completed(100);
        assert_eq!(done.current, 100);
        assert!(done.is_complete);
        assert_eq!(SimulationProgress::new(0, 0).percentage, 0.0);
    }
}
