use std::fmt::Display;
use std::fmt::Formatter;

use super::PolynomialError;

/// The width of a bit-vector sort. Values of this sort are the integers in `[0, 2^width)` and all
/// arithmetic wraps modulo `2^width`.
///
/// Widths are limited to 64 bits so that values fit a `u64` and products of two values fit a
/// `u128` without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitWidth(u32);

impl BitWidth {
    pub const MAX_BITS: u32 = 64;

    pub fn new(bits: u32) -> Result<BitWidth, PolynomialError> {
        if bits == 0 || bits > Self::MAX_BITS {
            return Err(PolynomialError::UnsupportedBitWidth(bits));
        }

        Ok(BitWidth(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns `2^width`, the smallest value that no longer fits the sort.
    pub fn modulus(self) -> u128 {
        1_u128 << self.0
    }

    /// Returns `2^width - 1`.
    pub fn max_value(self) -> u64 {
        u64::MAX >> (Self::MAX_BITS - self.0)
    }

    /// Reduce `value` modulo `2^width`.
    pub fn mask(self, value: u64) -> u64 {
        value & self.max_value()
    }

    /// Returns whether `lhs * rhs`, computed over the unbounded integers, stays below
    /// `2^width`.
    pub fn fits_product(self, lhs: u64, rhs: u64) -> bool {
        u128::from(lhs) * u128::from(rhs) < self.modulus()
    }
}

impl Display for BitWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "bv{}", self.0)
    }
}
