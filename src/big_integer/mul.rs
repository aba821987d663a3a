use super::{zeroed_limbs, BigInteger};
use crate::constants::*;
use crate::error::Result;

/// Schoolbook product of two magnitudes, `x.len() + y.len()` limbs wide.
pub(super) fn magnitude_mul(x: &[u32], y: &[u32]) -> Result<Vec<u32>> {
    let mut z = zeroed_limbs(x.len() + y.len())?;

    for (i, &x_val) in x.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &y_val) in y.iter().enumerate() {
            // at most (2^32 - 1)^2 + 2 * (2^32 - 1), which fits in u64
            let product = (x_val as u64) * (y_val as u64) + z[i + j] as u64 + carry;
            z[i + j] = product as u32;
            carry = product >> LIMB_BITS;
        }
        z[i + y.len()] = carry as u32;
    }

    Ok(z)
}

/// Multiplies a magnitude by a single limb.
pub(super) fn mul_by_limb(x: &[u32], y: u32) -> Vec<u32> {
    let mut result = Vec::with_capacity(x.len() + 1);
    let mut carry: u64 = 0;
    for &x_val in x {
        let product = (x_val as u64) * (y as u64) + carry;
        result.push(product as u32);
        carry = product >> LIMB_BITS;
    }
    result.push(carry as u32);
    result
}

// 实现乘法
impl BigInteger {
    /// Product of `self` and `val`, reporting allocation failure of the result buffer.
    pub fn checked_mul(&self, val: &BigInteger) -> Result<BigInteger> {
        if self.is_zero() || val.is_zero() {
            return Ok(BigInteger::default());
        }
        let mag = magnitude_mul(&self.limbs, &val.limbs)?;
        Ok(BigInteger::from_limbs(mag, self.negative != val.negative))
    }

    pub(crate) fn mul_ref(&self, val: &BigInteger) -> BigInteger {
        match self.checked_mul(val) {
            Ok(product) => product,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(impl Mul, mul, MulAssign, mul_assign => mul_ref);
