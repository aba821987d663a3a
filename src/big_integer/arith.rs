use std::cmp::Ordering;
use std::ops::Neg;

use super::cmp::magnitude_cmp;
use super::BigInteger;
use crate::constants::*;

/// Limb-wise sum of two magnitudes, extended by one limb on carry-out.
pub(super) fn magnitude_add(x: &[u32], y: &[u32]) -> Vec<u32> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry: u64 = 0;
    for (i, &val) in long.iter().enumerate() {
        let sum = val as u64 + short.get(i).copied().unwrap_or(0) as u64 + carry;
        result.push(sum as u32);
        carry = sum >> LIMB_BITS;
    }

    if carry != 0 {
        result.push(carry as u32);
    }

    result
}

/// `big - little` on magnitudes. Requires `big >= little`; the result may carry high zero limbs.
pub(super) fn magnitude_sub(big: &[u32], little: &[u32]) -> Vec<u32> {
    let mut result = Vec::with_capacity(big.len());
    let mut borrow: i64 = 0;
    for (i, &val) in big.iter().enumerate() {
        let mut difference = val as i64 - little.get(i).copied().unwrap_or(0) as i64 - borrow;
        borrow = 0;
        if difference < 0 {
            difference += LIMB_BASE as i64;
            borrow = 1;
        }
        result.push(difference as u32);
    }
    debug_assert_eq!(borrow, 0, "magnitude_sub underflow");
    result
}

/// Adds one to a magnitude in place, growing it on carry-out.
pub(super) fn magnitude_increment(mag: &mut Vec<u32>) {
    for limb in mag.iter_mut() {
        let (sum, carry) = limb.overflowing_add(1);
        *limb = sum;
        if !carry {
            return;
        }
    }
    mag.push(1);
}

// 实现加减法
impl BigInteger {
    pub(crate) fn add_ref(&self, val: &BigInteger) -> BigInteger {
        if self.negative == val.negative {
            return BigInteger::from_limbs(magnitude_add(&self.limbs, &val.limbs), self.negative);
        }

        // Opposite signs: the larger magnitude decides the sign
        match magnitude_cmp(&self.limbs, &val.limbs) {
            Ordering::Less => BigInteger::from_limbs(magnitude_sub(&val.limbs, &self.limbs), val.negative),
            Ordering::Equal => BigInteger::default(),
            Ordering::Greater => BigInteger::from_limbs(magnitude_sub(&self.limbs, &val.limbs), self.negative),
        }
    }

    pub(crate) fn sub_ref(&self, val: &BigInteger) -> BigInteger {
        if self.negative != val.negative {
            return BigInteger::from_limbs(magnitude_add(&self.limbs, &val.limbs), self.negative);
        }

        match magnitude_cmp(&self.limbs, &val.limbs) {
            Ordering::Less => BigInteger::from_limbs(magnitude_sub(&val.limbs, &self.limbs), !self.negative),
            Ordering::Equal => BigInteger::default(),
            Ordering::Greater => BigInteger::from_limbs(magnitude_sub(&self.limbs, &val.limbs), self.negative),
        }
    }

    /// Flips the sign in place; zero stays non-negative.
    pub(crate) fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }
}

forward_binop!(impl Add, add, AddAssign, add_assign => add_ref);
forward_binop!(impl Sub, sub, SubAssign, sub_assign => sub_ref);

// 实现取反
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}
