use std::cmp::Ordering;

use super::BigInteger;

/// Compares two normalized magnitudes.
pub(super) fn magnitude_cmp(x: &[u32], y: &[u32]) -> Ordering {
    if x.len() != y.len() {
        return x.len().cmp(&y.len());
    }
    x.iter().rev().cmp(y.iter().rev())
}

// 实现大小比较
impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude_cmp(&self.limbs, &other.limbs),
            // both negative: larger magnitude is smaller
            (true, true) => magnitude_cmp(&other.limbs, &self.limbs),
        }
    }
}
