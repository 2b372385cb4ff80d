//! Spin generator: one uniform wheel outcome per call

use wf_core::{POCKET_COUNT, WHEEL_ORDER, WfResult, WheelNumber};

use crate::entropy::{EntropySource, OsEntropy, SeededEntropy};

/// 2^32, the exclusive upper bound of a `u32` draw
const U32_RANGE: f64 = 4_294_967_296.0;

/// Map a uniform 32-bit word onto a wheel pocket.
///
/// The word is normalized to [0, 1), scaled by 37 and floored; the result
/// indexes physical wheel order.
#[inline]
pub fn pocket_for(raw: u32) -> WheelNumber {
    let unit = raw as f64 / U32_RANGE;
    let index = (unit * POCKET_COUNT as f64) as usize;
    WHEEL_ORDER[index.min(POCKET_COUNT - 1)]
}

/// Uniform spin generator
///
/// Holds no state besides its entropy handle.
pub struct SpinGenerator<E: EntropySource = OsEntropy> {
    entropy: E,
}

impl SpinGenerator<OsEntropy> {
    /// Generator backed by the OS CSPRNG
    pub fn new() -> Self {
        Self::with_entropy(OsEntropy::new())
    }
}

impl Default for SpinGenerator<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinGenerator<SeededEntropy> {
    /// Replayable generator for tests and benchmarks
    pub fn seeded(seed: u64) -> Self {
        Self::with_entropy(SeededEntropy::new(seed))
    }
}

impl<E: EntropySource> SpinGenerator<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Spin the wheel once
    #[inline]
    pub fn spin(&mut self) -> WfResult<WheelNumber> {
        self.entropy.next_u32().map(pocket_for)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_core::WfError;

    struct BrokenEntropy;

    impl EntropySource for BrokenEntropy {
        fn next_u32(&mut self) -> WfResult<u32> {
            Err(WfError::EntropyUnavailable("device gone".into()))
        }
    }

    #[test]
    fn test_pocket_bounds() {
        assert_eq!(pocket_for(0), WHEEL_ORDER[0]);
        assert_eq!(pocket_for(u32::MAX), WHEEL_ORDER[36]);
    }

    #[test]
    fn test_every_pocket_reachable() {
        // Sample each of the 37 equal-width buckets at its midpoint
        let width = U32_RANGE / POCKET_COUNT as f64;
        for (i, expected) in WHEEL_ORDER.iter().enumerate() {
            let raw = (width * (i as f64 + 0.5)) as u32;
            assert_eq!(pocket_for(raw), *expected, "bucket {i}");
        }
    }

    #[test]
    fn test_seeded_generator_is_replayable() {
        let mut a = SpinGenerator::seeded(7);
        let mut b = SpinGenerator::seeded(7);
        for _ in 0..500 {
            assert_eq!(a.spin().unwrap(), b.spin().unwrap());
        }
    }

    #[test]
    fn test_os_generator_in_range() {
        let mut generator = SpinGenerator::new();
        for _ in 0..10_000 {
            assert!(generator.spin().unwrap().value() <= 36);
        }
    }

    #[test]
    fn test_entropy_failure_is_surfaced() {
        let mut generator = SpinGenerator::with_entropy(BrokenEntropy);
        assert!(matches!(generator.spin(), Err(WfError::EntropyUnavailable(_))));
    }
}
