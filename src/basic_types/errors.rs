use thiserror::Error;

use super::BitWidth;

/// Errors that can occur while building polynomials and constraints.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    #[error("bit-width {0} is not supported, widths must lie in 1..=64")]
    UnsupportedBitWidth(u32),
    #[error("operands have different bit-widths ({lhs} and {rhs})")]
    WidthMismatch { lhs: BitWidth, rhs: BitWidth },
}
