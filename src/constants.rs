/// Width of one limb in bits.
pub const LIMB_BITS: u32 = u32::BITS;

/// `2^LIMB_BITS`, the radix of the magnitude.
pub const LIMB_BASE: u64 = 1 << LIMB_BITS;

pub const LIMB_MAX: u32 = u32::MAX;

pub const DECIMAL_RADIX: u32 = 10;

/// Number of decimal digits packed into one group during text conversion.
/// `10^DIGITS_PER_LIMB` must fit in a limb.
pub const DIGITS_PER_LIMB: usize = 9;

/// `DECIMAL_RADIX ^ DIGITS_PER_LIMB`
pub const DECIMAL_GROUP_RADIX: u32 = 1_000_000_000;

/// Largest magnitude kept in the small-value cache.
pub const MAX_CONSTANT: usize = 16;
