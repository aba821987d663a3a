use std::ops::Not;

use super::arith::magnitude_increment;
use super::BigInteger;
use crate::cache::ONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply(self, x: u32, y: u32) -> u32 {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }

    fn apply_sign(self, x: bool, y: bool) -> bool {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }
}

impl BigInteger {
    /// Low `len` limbs of the infinite two's-complement pattern.
    /// Limbs above `len` are implied by the sign: all zeros, or all ones when negative.
    /// Requires `len >= self.limbs.len()`.
    pub(super) fn to_twos_complement(&self, len: usize) -> Vec<u32> {
        debug_assert!(len >= self.limbs.len());
        let mut limbs = self.limbs.clone();
        limbs.resize(len, 0);
        if self.negative {
            // invert, then add one; a carry out of the top limb stays in the implied ones
            for limb in limbs.iter_mut() {
                *limb = !*limb;
            }
            for limb in limbs.iter_mut() {
                let (sum, carry) = limb.overflowing_add(1);
                *limb = sum;
                if !carry {
                    break;
                }
            }
        }
        limbs
    }

    /// Inverse of [`BigInteger::to_twos_complement`]: `sign_bit` is the value of every limb above `limbs`.
    pub(super) fn from_twos_complement(mut limbs: Vec<u32>, sign_bit: bool) -> BigInteger {
        if sign_bit {
            for limb in limbs.iter_mut() {
                *limb = !*limb;
            }
            magnitude_increment(&mut limbs);
        }
        BigInteger::from_limbs(limbs, sign_bit)
    }

    fn bitwise(&self, val: &BigInteger, op: BitOp) -> BigInteger {
        let len = self.limbs.len().max(val.limbs.len());
        let x = self.to_twos_complement(len);
        let y = val.to_twos_complement(len);
        let limbs = x.iter().zip(y.iter()).map(|(&a, &b)| op.apply(a, b)).collect();
        BigInteger::from_twos_complement(limbs, op.apply_sign(self.negative, val.negative))
    }

    pub(crate) fn and_ref(&self, val: &BigInteger) -> BigInteger {
        self.bitwise(val, BitOp::And)
    }

    pub(crate) fn or_ref(&self, val: &BigInteger) -> BigInteger {
        self.bitwise(val, BitOp::Or)
    }

    pub(crate) fn xor_ref(&self, val: &BigInteger) -> BigInteger {
        self.bitwise(val, BitOp::Xor)
    }
}

forward_binop!(impl BitAnd, bitand, BitAndAssign, bitand_assign => and_ref);
forward_binop!(impl BitOr, bitor, BitOrAssign, bitor_assign => or_ref);
forward_binop!(impl BitXor, bitxor, BitXorAssign, bitxor_assign => xor_ref);

// ~x == -(x + 1)
impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> Self::Output {
        let mut result = self + &*ONE;
        result.negate();
        result
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    fn not(self) -> Self::Output {
        !&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_to_twos_complement() {
        assert_eq!(big("5").to_twos_complement(2), vec![5, 0]);
        assert_eq!(big("-1").to_twos_complement(2), vec![u32::MAX, u32::MAX]);
        assert_eq!(big("-4294967296").to_twos_complement(2), vec![0, u32::MAX]);
        assert_eq!(big("-4294967296").to_twos_complement(3), vec![0, u32::MAX, u32::MAX]);
        assert_eq!(big("0").to_twos_complement(1), vec![0]);
    }

    #[test]
    fn test_from_twos_complement() {
        assert_eq!(BigInteger::from_twos_complement(vec![u32::MAX, u32::MAX], true), big("-1"));
        assert_eq!(BigInteger::from_twos_complement(vec![0, u32::MAX], true), big("-4294967296"));
        // all-zero low limbs under a set sign bit: -2^64
        assert_eq!(BigInteger::from_twos_complement(vec![0, 0], true), big("-18446744073709551616"));
        assert_eq!(BigInteger::from_twos_complement(vec![7, 0], false), big("7"));
    }

    #[test]
    fn test_twos_complement_round_trip() {
        for s in ["0", "1", "-1", "-4294967295", "-4294967296", "-4294967297", "123456789012345678901234567890"] {
            let a = big(s);
            let len = a.limbs().len() + 1;
            assert_eq!(BigInteger::from_twos_complement(a.to_twos_complement(len), a.is_negative()), a);
        }
    }

    #[test]
    fn test_and() {
        assert_eq!(big("12") & big("10"), big("8"));
        assert_eq!(big("-12") & big("10"), big("0"));
        assert_eq!(big("-12") & big("-10"), big("-12"));
        assert_eq!(big("-1") & big("18446744073709551616"), big("18446744073709551616"));
        assert_eq!(big("-4294967296") & big("4294967295"), big("0"));
    }

    #[test]
    fn test_or() {
        assert_eq!(big("12") | big("10"), big("14"));
        assert_eq!(big("-12") | big("10"), big("-2"));
        assert_eq!(big("-12") | big("-10"), big("-10"));
        assert_eq!(big("-4294967296") | big("4294967295"), big("-1"));
    }

    #[test]
    fn test_xor() {
        assert_eq!(big("12") ^ big("10"), big("6"));
        assert_eq!(big("-12") ^ big("10"), big("-2"));
        assert_eq!(big("-12") ^ big("-10"), big("2"));
        let a = big("-98765432109876543210");
        assert!((&a ^ &a).is_zero());
    }

    #[test]
    fn test_not() {
        assert_eq!(!big("0"), big("-1"));
        assert_eq!(!big("-1"), big("0"));
        assert_eq!(!big("5"), big("-6"));
        assert_eq!(!big("-4294967296"), big("4294967295"));
        let a = big("340282366920938463463374607431768211456");
        assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn test_assign_forms() {
        let mut a = big("255");
        a &= big("-16");
        assert_eq!(a, big("240"));
        a |= &big("-256");
        assert_eq!(a, big("-16"));
        a ^= big("-1");
        assert_eq!(a, big("15"));
    }
}
