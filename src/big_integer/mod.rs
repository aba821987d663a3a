//! # BigInteger
//! Arbitrary-precision signed integers in sign-magnitude form.
//! Bitwise operators and shifts behave as if the value were an infinitely wide two's-complement bit pattern.
//! The magnitude is only bounded by available memory.
//! # Example
//! ```
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "10000000000000".parse().unwrap();
//! let b: BigInteger = "-900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a & b = {}", &a & &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("b >> 10 = {}", &b >> 10);
//! ```
//!

use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::cache::ONE;
use crate::constants::*;
use crate::error::{BigIntegerError, Result};

/// Implements a binary operator for every owned/borrowed operand combination,
/// plus both compound-assignment forms, on top of one `fn(&BigInteger, &BigInteger) -> BigInteger`.
macro_rules! forward_binop {
    (impl $imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident => $core: ident) => {
        impl std::ops::$imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> Self::Output {
                BigInteger::$core(self, rhs)
            }
        }

        impl std::ops::$imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> Self::Output {
                BigInteger::$core(&self, &rhs)
            }
        }

        impl std::ops::$imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> Self::Output {
                BigInteger::$core(&self, rhs)
            }
        }

        impl std::ops::$imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> Self::Output {
                BigInteger::$core(self, &rhs)
            }
        }

        impl std::ops::$assign_imp<&BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: &BigInteger) {
                *self = BigInteger::$core(self, rhs);
            }
        }

        impl std::ops::$assign_imp<BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: BigInteger) {
                *self = BigInteger::$core(self, &rhs);
            }
        }
    };
}

mod arith;
mod bitwise;
mod cmp;
mod div;
mod mul;
mod shift;

/// Sign and magnitude. `limbs` holds the magnitude in base `2^32`, least significant limb first.
///
/// Every public operation leaves the value canonical:
/// - no most-significant zero limb, except that zero is exactly `[0]`;
/// - zero is never negative;
/// - `limbs` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    negative: bool,
    limbs: Vec<u32>,
}

// 规范化
impl BigInteger {
    /// Builds a value from a little-endian magnitude and a sign, normalizing both.
    pub fn from_limbs(limbs: Vec<u32>, negative: bool) -> Self {
        let mut val = BigInteger { negative, limbs };
        val.normalize();
        val
    }

    /// Strips most-significant zero limbs and collapses an empty magnitude to canonical zero.
    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
            self.negative = false;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Little-endian magnitude limbs.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn abs(&self) -> BigInteger {
        BigInteger { negative: false, limbs: self.limbs.clone() }
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger { negative: false, limbs: vec![0] }
    }
}

/// Drops most-significant zero limbs, possibly leaving the slice empty.
fn trim(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// Allocates a zeroed limb buffer, reporting exhaustion instead of aborting.
fn zeroed_limbs(len: usize) -> Result<Vec<u32>> {
    let mut limbs = Vec::new();
    limbs
        .try_reserve_exact(len)
        .map_err(|_| BigIntegerError::AllocationFailure { limbs: len })?;
    limbs.resize(len, 0);
    Ok(limbs)
}

// 实现构造
macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            // unsigned_abs keeps MIN representable
            BigInteger::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_integer!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_integer!(i8, i16, i32, i64, i128, isize);

impl BigInteger {
    fn value_of(mut val: u128, negative: bool) -> BigInteger {
        let mut limbs = Vec::with_capacity(4);
        loop {
            limbs.push(val as u32);
            val >>= LIMB_BITS;
            if val == 0 {
                break;
            }
        }
        BigInteger::from_limbs(limbs, negative)
    }

    fn low_u64(&self) -> u64 {
        let high = self.limbs.get(1).copied().unwrap_or(0) as u64;
        (high << LIMB_BITS) | self.limbs[0] as u64
    }

    /// Returns the value as `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative || self.limbs.len() > 2 {
            None
        } else {
            Some(self.low_u64())
        }
    }

    /// Returns the value as `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        if self.limbs.len() > 2 {
            return None;
        }
        let mag = self.low_u64();
        if !self.negative {
            i64::try_from(mag).ok()
        } else if mag <= i64::MIN.unsigned_abs() {
            Some((mag as i64).wrapping_neg())
        } else {
            None
        }
    }
}

// 实现打印
impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_to_decimal())
    }
}

impl BigInteger {
    /// Decimal digits of the magnitude, without sign.
    fn magnitude_to_decimal(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        // Peel off DIGITS_PER_LIMB digits at a time, least significant group first
        let mut groups: Vec<u32> = Vec::with_capacity(self.limbs.len() * 2);
        let mut mag = self.limbs.clone();
        while !mag.is_empty() {
            let (mut quotient, rem) = div::short_div(&mag, DECIMAL_GROUP_RADIX);
            trim(&mut quotient);
            groups.push(rem);
            mag = quotient;
        }

        let mut result = String::with_capacity(groups.len() * DIGITS_PER_LIMB);
        let mut iter = groups.iter().rev();
        if let Some(first) = iter.next() {
            let _ = write!(result, "{}", first);
        }
        // Remaining groups are padded with leading zeros
        for group in iter {
            let _ = write!(result, "{:0width$}", group, width = DIGITS_PER_LIMB);
        }
        result
    }
}

// 实现解析
impl FromStr for BigInteger {
    type Err = BigIntegerError;

    /// Parses an optionally signed run of decimal digits. Leading zeros are allowed.
    fn from_str(val: &str) -> Result<Self> {
        let (negative, digits) = match val.as_bytes().first() {
            None => return Err(BigIntegerError::InvalidFormat("empty string")),
            Some(b'-') => (true, &val[1..]),
            Some(b'+') => (false, &val[1..]),
            Some(_) => (false, val),
        };

        if digits.is_empty() {
            return Err(BigIntegerError::InvalidFormat("sign without digits"));
        }
        if !digits.bytes().all(|c| c.is_ascii_digit()) {
            return Err(BigIntegerError::InvalidFormat("non-digit character"));
        }

        // skip leading zero
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(BigInteger::default());
        }

        let mut magnitude: Vec<u32> = Vec::with_capacity(digits.len() / DIGITS_PER_LIMB + 1);
        let mut group_len = digits.len() % DIGITS_PER_LIMB;
        if group_len == 0 {
            group_len = DIGITS_PER_LIMB;
        }
        let mut cursor = 0;
        while cursor < digits.len() {
            let group_val = digits[cursor..cursor + group_len]
                .bytes()
                .fold(0_u32, |acc, c| acc * DECIMAL_RADIX + (c - b'0') as u32);
            BigInteger::destructive_mul_add(&mut magnitude, DECIMAL_GROUP_RADIX, group_val);
            cursor += group_len;
            group_len = DIGITS_PER_LIMB;
        }

        Ok(BigInteger::from_limbs(magnitude, negative))
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = BigIntegerError;

    fn try_from(val: &str) -> Result<Self> {
        val.parse()
    }
}

impl BigInteger {
    /// `magnitude = magnitude * radix + addend`, in place.
    #[inline(always)]
    fn destructive_mul_add(magnitude: &mut Vec<u32>, radix: u32, addend: u32) {
        let mut carry = addend as u64;
        for x in magnitude.iter_mut() {
            let product = (*x as u64) * (radix as u64) + carry;
            *x = product as u32;
            carry = product >> LIMB_BITS;
        }
        if carry != 0 {
            magnitude.push(carry as u32);
        }
    }
}

// 实现自增自减
impl BigInteger {
    /// Pre-increment: adds one and returns the updated value.
    pub fn increment(&mut self) -> &mut Self {
        *self += &*ONE;
        self
    }

    /// Post-increment: adds one and returns the value held before.
    pub fn post_increment(&mut self) -> BigInteger {
        let prior = self.clone();
        *self += &*ONE;
        prior
    }

    /// Pre-decrement: subtracts one and returns the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= &*ONE;
        self
    }

    /// Post-decrement: subtracts one and returns the value held before.
    pub fn post_decrement(&mut self) -> BigInteger {
        let prior = self.clone();
        *self -= &*ONE;
        prior
    }
}
