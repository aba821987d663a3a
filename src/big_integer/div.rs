use std::cmp::Ordering;

use tracing::trace;

use super::cmp::magnitude_cmp;
use super::mul::mul_by_limb;
use super::BigInteger;
use crate::constants::*;
use crate::error::{BigIntegerError, Result};

// 实现除法
impl BigInteger {
    /// Truncating division: returns `(quotient, remainder)` with
    /// `quotient * divisor + remainder == self`, `|remainder| < |divisor|`,
    /// and the remainder carrying the sign of `self`.
    pub fn div_rem(&self, divisor: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if divisor.is_zero() {
            return Err(BigIntegerError::DivideByZero);
        }

        if magnitude_cmp(&self.limbs, &divisor.limbs) == Ordering::Less {
            return Ok((BigInteger::default(), self.clone()));
        }

        let (quotient, remainder) = if divisor.limbs.len() == 1 {
            let (q, r) = short_div(&self.limbs, divisor.limbs[0]);
            (q, vec![r])
        } else {
            divide_knuth(&self.limbs, &divisor.limbs)
        };

        Ok((
            BigInteger::from_limbs(quotient, self.negative != divisor.negative),
            BigInteger::from_limbs(remainder, self.negative),
        ))
    }

    pub fn checked_div(&self, divisor: &BigInteger) -> Result<BigInteger> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &BigInteger) -> Result<BigInteger> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    pub(crate) fn div_ref(&self, divisor: &BigInteger) -> BigInteger {
        match self.checked_div(divisor) {
            Ok(q) => q,
            Err(err) => panic!("{}", err),
        }
    }

    pub(crate) fn rem_ref(&self, divisor: &BigInteger) -> BigInteger {
        match self.checked_rem(divisor) {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(impl Div, div, DivAssign, div_assign => div_ref);
forward_binop!(impl Rem, rem, RemAssign, rem_assign => rem_ref);

/// Divides a magnitude by a single non-zero limb, most significant limb first.
/// The quotient keeps the dividend's length and may carry high zero limbs.
pub(super) fn short_div(u: &[u32], v: u32) -> (Vec<u32>, u32) {
    let mut w = vec![0_u32; u.len()];
    let mut r: u64 = 0;
    for j in (0..u.len()).rev() {
        let sum = (r << LIMB_BITS) + u[j] as u64;
        w[j] = (sum / v as u64) as u32;
        r = sum % v as u64;
    }
    (w, r as u32)
}

/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
/// Requires `v.len() >= 2` and `u >= v`.
fn divide_knuth(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let n = v.len();
    let m = u.len() - n;

    // D1 normalize
    // d = b / (Vn-1 + 1), here b = 2^32
    // so d * Vn-1 >= b / 2 and the scaled divisor keeps n limbs
    let factor = (LIMB_BASE / (v[n - 1] as u64 + 1)) as u32;
    let mut v_norm = mul_by_limb(v, factor);
    v_norm.truncate(n);
    debug_assert!(v_norm[n - 1] >= 1 << (LIMB_BITS - 1));
    // m + n + 1 limbs
    let mut u_norm = mul_by_limb(u, factor);

    let v_top = v_norm[n - 1] as u64;
    let mut q = vec![0_u32; m + 1];
    for j in (0..=m).rev() {
        // D3 estimate qhat from the top two limbs of the running remainder
        let sum = ((u_norm[j + n] as u64) << LIMB_BITS) + u_norm[j + n - 1] as u64;
        let mut qhat = (sum / v_top).min(LIMB_MAX as u64) as u32;

        // D4 multiply and subtract
        // qhat overshoots by at most 2 once the divisor is normalized
        let mut product = mul_by_limb(&v_norm, qhat);
        let window = &mut u_norm[j..=j + n];
        let mut corrections = 0;
        while cmp_window(window, &product) == Ordering::Less {
            qhat -= 1;
            sub_in_place(&mut product, &v_norm);
            corrections += 1;
            trace!(position = j, digit = qhat, "corrected trial quotient digit");
        }
        debug_assert!(corrections <= 2);
        sub_in_place(window, &product);
        q[j] = qhat;
    }

    // D8 unnormalize
    let (r, lost) = short_div(&u_norm[..n], factor);
    debug_assert_eq!(lost, 0);
    (q, r)
}

/// Compares two equal-length limb windows, most significant limb first.
fn cmp_window(x: &[u32], y: &[u32]) -> Ordering {
    x.iter().rev().cmp(y.iter().rev())
}

/// `x -= y` over `x.len()` limbs. Requires `x >= y`.
fn sub_in_place(x: &mut [u32], y: &[u32]) {
    let mut borrow = false;
    for (i, limb) in x.iter_mut().enumerate() {
        let (diff, b1) = limb.overflowing_sub(y.get(i).copied().unwrap_or(0));
        let (diff, b2) = diff.overflowing_sub(borrow as u32);
        *limb = diff;
        borrow = b1 || b2;
    }
    debug_assert!(!borrow, "sub_in_place underflow");
}
