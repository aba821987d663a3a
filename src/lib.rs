//! Big Integer \
//! This crate provides:
//! - [`BigInteger`]: arbitrary-precision signed integers stored as sign and magnitude.
//!   Bitwise operations and shifts behave as if the value were an infinitely wide
//!   two's-complement bit pattern.
//! - [`BigIntegerError`]: the errors raised by parsing, division and allocation.

mod big_integer;
mod cache;
mod constants;
mod error;

pub use big_integer::BigInteger;
pub use error::{BigIntegerError, Result};
