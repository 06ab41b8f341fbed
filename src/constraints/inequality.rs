use std::fmt::Display;
use std::fmt::Formatter;

use super::SignedConstraint;
use crate::polynomial::Polynomial;

/// `lhs <= rhs`, or `lhs < rhs` if `is_strict`, derived from an unsigned comparison literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inequality {
    pub lhs: Polynomial,
    pub rhs: Polynomial,
    pub is_strict: bool,
    origin: SignedConstraint,
}

impl Inequality {
    pub(super) fn new(
        lhs: Polynomial,
        rhs: Polynomial,
        is_strict: bool,
        origin: SignedConstraint,
    ) -> Inequality {
        Inequality {
            lhs,
            rhs,
            is_strict,
            origin,
        }
    }

    /// The literal this inequality was derived from.
    pub fn as_signed_constraint(&self) -> &SignedConstraint {
        &self.origin
    }
}

impl Display for Inequality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let operator = if self.is_strict { "<" } else { "<=" };
        write!(f, "{} {operator} {}", self.lhs, self.rhs)
    }
}
