//! Physical and numeric neighborhoods of an anchor number

use wf_core::WheelNumber;

/// Maximum size of the combined neighbor set
pub const NEIGHBOR_SET_LIMIT: usize = 8;

/// Numeric neighbors `[a-2, a-1, a, a+1, a+2]`, wrapping modulo 37.
///
/// The anchor itself sits in the middle slot.
pub fn math_neighbors(anchor: WheelNumber) -> [WheelNumber; 5] {
    [
        anchor.offset(-2),
        anchor.offset(-1),
        anchor,
        anchor.offset(1),
        anchor.offset(2),
    ]
}

/// Physical neighbors then numeric neighbors, first occurrence kept, at most
/// [`NEIGHBOR_SET_LIMIT`] entries.
pub fn neighbor_set(anchor: WheelNumber) -> Vec<WheelNumber> {
    let mut set: Vec<WheelNumber> = Vec::with_capacity(NEIGHBOR_SET_LIMIT);
    for &n in anchor.neighbors().iter().chain(math_neighbors(anchor).iter()) {
        if set.len() == NEIGHBOR_SET_LIMIT {
            break;
        }
        if !set.contains(&n) {
            set.push(n);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(ns: &[WheelNumber]) -> Vec<u8> {
        ns.iter().map(|n| n.value()).collect()
    }

    #[test]
    fn test_math_neighbors_wrap() {
        assert_eq!(values(&math_neighbors(WheelNumber::ZERO)), vec![35, 36, 0, 1, 2]);
        assert_eq!(values(&math_neighbors(WheelNumber::MAX)), vec![34, 35, 36, 0, 1]);
    }

    #[test]
    fn test_zero_neighbor_set() {
        // [32, 15] then [35, 36, 0, 1, 2]
        assert_eq!(values(&neighbor_set(WheelNumber::ZERO)), vec![32, 15, 35, 36, 0, 1, 2]);
    }

    #[test]
    fn test_neighbor_set_capped_and_unique() {
        for anchor in WheelNumber::all() {
            let set = neighbor_set(anchor);
            assert!(set.len() <= NEIGHBOR_SET_LIMIT);
            let mut sorted = set.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), set.len(), "duplicates for {anchor}");
            assert!(set.contains(&anchor));
        }
    }

    #[test]
    fn test_four_neighbor_anchor_truncated() {
        // [23, 5, 24, 16] + [8, 9, 10, 11, 12] loses 12
        let set = neighbor_set(WheelNumber::new(10).unwrap());
        assert_eq!(values(&set), vec![23, 5, 24, 16, 8, 9, 10, 11]);
    }
}
