use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use super::arith::magnitude_increment;
use super::{zeroed_limbs, BigInteger};
use crate::cache::NEG_CACHE;
use crate::constants::*;
use crate::error::Result;

/// `mag * 2^n`; the result may carry high zero limbs.
fn magnitude_shl(mag: &[u32], n: u32) -> Result<Vec<u32>> {
    let n_limbs = (n / LIMB_BITS) as usize;
    let n_bits = n % LIMB_BITS;
    let mut result = zeroed_limbs(mag.len() + n_limbs + 1)?;
    for (i, &val) in mag.iter().enumerate() {
        result[i + n_limbs] |= val << n_bits;
        if n_bits != 0 {
            result[i + n_limbs + 1] |= val >> (LIMB_BITS - n_bits);
        }
    }
    Ok(result)
}

/// `mag / 2^n` truncated, plus whether any set bit was shifted out.
/// Requires `n / LIMB_BITS < mag.len()`.
fn magnitude_shr(mag: &[u32], n: u32) -> (Vec<u32>, bool) {
    let n_limbs = (n / LIMB_BITS) as usize;
    let n_bits = n % LIMB_BITS;

    let one_lost = mag[..n_limbs].iter().any(|&val| val != 0)
        || (n_bits != 0 && mag[n_limbs] & ((1_u32 << n_bits) - 1) != 0);

    let mut result = Vec::with_capacity(mag.len() - n_limbs);
    for i in n_limbs..mag.len() {
        let mut val = mag[i] >> n_bits;
        if n_bits != 0 {
            if let Some(&high) = mag.get(i + 1) {
                val |= high << (LIMB_BITS - n_bits);
            }
        }
        result.push(val);
    }
    (result, one_lost)
}

// 实现左移
impl BigInteger {
    /// `self * 2^n`, reporting allocation failure of the result buffer.
    pub fn checked_shl(&self, n: u32) -> Result<BigInteger> {
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }
        let mag = magnitude_shl(&self.limbs, n)?;
        Ok(BigInteger::from_limbs(mag, self.negative))
    }

    fn shl_ref(&self, n: u32) -> BigInteger {
        match self.checked_shl(n) {
            Ok(val) => val,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Shl<u32> for BigInteger {
    type Output = BigInteger;

    fn shl(self, n: u32) -> Self::Output {
        self.shl_ref(n)
    }
}

impl Shl<u32> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, n: u32) -> Self::Output {
        self.shl_ref(n)
    }
}

impl ShlAssign<u32> for BigInteger {
    fn shl_assign(&mut self, n: u32) {
        *self = self.shl_ref(n);
    }
}

// 实现右移
impl BigInteger {
    /// Arithmetic shift: rounds toward negative infinity.
    fn shr_ref(&self, n: u32) -> BigInteger {
        if n == 0 {
            return self.clone();
        }

        if (n / LIMB_BITS) as usize >= self.limbs.len() {
            return if self.negative {
                NEG_CACHE[1].clone()
            } else {
                BigInteger::default()
            };
        }

        let (mut mag, one_lost) = magnitude_shr(&self.limbs, n);
        if self.negative && one_lost {
            magnitude_increment(&mut mag);
        }
        BigInteger::from_limbs(mag, self.negative)
    }
}

impl Shr<u32> for BigInteger {
    type Output = BigInteger;

    fn shr(self, n: u32) -> Self::Output {
        self.shr_ref(n)
    }
}

impl Shr<u32> for &BigInteger {
    type Output = BigInteger;

    fn shr(self, n: u32) -> Self::Output {
        self.shr_ref(n)
    }
}

impl ShrAssign<u32> for BigInteger {
    fn shr_assign(&mut self, n: u32) {
        *self = self.shr_ref(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_shl() {
        assert_eq!(big("1") << 64, big("18446744073709551616"));
        assert_eq!(big("1") << 0, big("1"));
        assert_eq!(big("3") << 31, big("6442450944"));
        assert_eq!(big("-5") << 33, big("-42949672960"));
        assert!((BigInteger::default() << 100).is_zero());
        assert_eq!(
            big("4294967295") << 100,
            big("5444517869467364815185764317411588177920")
        );
    }

    #[test]
    fn test_shr_non_negative() {
        assert_eq!(big("18446744073709551616") >> 64, big("1"));
        assert_eq!(big("18446744073709551615") >> 32, big("4294967295"));
        assert_eq!(big("7") >> 1, big("3"));
        assert!((big("7") >> 3).is_zero());
        assert!((big("7") >> 200).is_zero());
        assert_eq!(big("6442450944") >> 31, big("3"));
    }

    #[test]
    fn test_shr_negative_floors() {
        assert_eq!(big("-4") >> 1, big("-2"));
        assert_eq!(big("-5") >> 1, big("-3"));
        assert_eq!(big("-1") >> 1, big("-1"));
        assert_eq!(big("-1") >> 1000, big("-1"));
        assert_eq!(big("-18446744073709551616") >> 64, big("-1"));
        assert_eq!(big("-18446744073709551617") >> 64, big("-2"));
        assert_eq!(big("-18446744073709551616") >> 32, big("-4294967296"));
        assert_eq!(big("-4294967297") >> 32, big("-2"));
    }

    #[test]
    fn test_shift_round_trip() {
        let a = big("98765432109876543210987654321");
        for k in [0, 1, 31, 32, 33, 64, 95, 200] {
            assert_eq!((&a << k) >> k, a);
        }
    }

    #[test]
    fn test_assign_forms() {
        let mut a = big("-3");
        a <<= 40;
        assert_eq!(a, big("-3298534883328"));
        a >>= 41;
        assert_eq!(a, big("-2"));
        assert_eq!(a.checked_shl(1), Ok(big("-4")));
    }
}
