//! Constraints over bit-vector polynomials and their signed (literal) forms.
mod inequality;

use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Not;
use std::rc::Rc;

pub use inequality::Inequality;

use crate::basic_types::PolynomialError;
use crate::polynomial::Polynomial;
use crate::polysat_assert_eq_simple;
use crate::variables::PVar;

/// The primitive constraints. All comparisons are unsigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// `lhs <= rhs`
    Ule { lhs: Polynomial, rhs: Polynomial },
    /// `p * q` does not fit the bit-width, i.e. the product wraps.
    UMulOverflow { p: Polynomial, q: Polynomial },
}

impl Constraint {
    /// Evaluate the constraint, where `value_of` provides the values of variables. Returns
    /// `None` when one of the polynomials cannot be evaluated.
    pub fn evaluate(&self, mut value_of: impl FnMut(PVar) -> Option<u64>) -> Option<bool> {
        match self {
            Constraint::Ule { lhs, rhs } => {
                let lhs = lhs.evaluate(&mut value_of)?;
                let rhs = rhs.evaluate(&mut value_of)?;
                Some(lhs <= rhs)
            }
            Constraint::UMulOverflow { p, q } => {
                let p_val = p.evaluate(&mut value_of)?;
                let q_val = q.evaluate(&mut value_of)?;
                Some(!p.width().fits_product(p_val, q_val))
            }
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Ule { lhs, rhs } => write!(f, "{lhs} <= {rhs}"),
            Constraint::UMulOverflow { p, q } => write!(f, "ovfl*({p}, {q})"),
        }
    }
}

/// A constraint together with a polarity; the negative polarity denotes the negation of the
/// constraint.
///
/// Signed constraints are cheap to clone, the underlying constraint is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedConstraint {
    constraint: Rc<Constraint>,
    is_positive: bool,
}

impl SignedConstraint {
    pub fn new(constraint: Constraint, is_positive: bool) -> SignedConstraint {
        SignedConstraint {
            constraint: Rc::new(constraint),
            is_positive,
        }
    }

    /// `lhs <= rhs`
    pub fn ule(lhs: Polynomial, rhs: Polynomial) -> SignedConstraint {
        polysat_assert_eq_simple!(
            lhs.width(),
            rhs.width(),
            "comparing polynomials of different widths"
        );
        SignedConstraint::new(Constraint::Ule { lhs, rhs }, true)
    }

    /// `lhs <= rhs`, reporting operands of different widths as an error.
    pub fn try_ule(lhs: Polynomial, rhs: Polynomial) -> Result<SignedConstraint, PolynomialError> {
        lhs.check_width(&rhs)?;
        Ok(SignedConstraint::ule(lhs, rhs))
    }

    /// `lhs < rhs`, represented as `!(rhs <= lhs)`.
    pub fn ult(lhs: Polynomial, rhs: Polynomial) -> SignedConstraint {
        !SignedConstraint::ule(rhs, lhs)
    }

    /// `p == 0`, represented as `p <= 0`.
    pub fn eq(p: Polynomial) -> SignedConstraint {
        let zero = Polynomial::zero(p.width());
        SignedConstraint::ule(p, zero)
    }

    /// `lhs < rhs` when `is_strict`, otherwise `lhs <= rhs`.
    pub fn inequality(is_strict: bool, lhs: Polynomial, rhs: Polynomial) -> SignedConstraint {
        if is_strict {
            SignedConstraint::ult(lhs, rhs)
        } else {
            SignedConstraint::ule(lhs, rhs)
        }
    }

    /// The product `p * q` wraps around.
    pub fn umul_overflow(p: Polynomial, q: Polynomial) -> SignedConstraint {
        polysat_assert_eq_simple!(p.width(), q.width(), "multiplying different widths");
        SignedConstraint::new(Constraint::UMulOverflow { p, q }, true)
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    pub fn is_positive(&self) -> bool {
        self.is_positive
    }

    pub fn is_ule(&self) -> bool {
        matches!(*self.constraint, Constraint::Ule { .. })
    }

    /// View an unsigned comparison literal as an inequality. A positive `a <= b` gives
    /// `a <= b`, its negation gives `b < a`.
    pub fn as_inequality(&self) -> Option<Inequality> {
        let Constraint::Ule { lhs, rhs } = self.constraint() else {
            return None;
        };

        Some(if self.is_positive {
            Inequality::new(lhs.clone(), rhs.clone(), false, self.clone())
        } else {
            Inequality::new(rhs.clone(), lhs.clone(), true, self.clone())
        })
    }

    /// Evaluate the literal, see [`Constraint::evaluate`].
    pub fn evaluate(&self, value_of: impl FnMut(PVar) -> Option<u64>) -> Option<bool> {
        self.constraint
            .evaluate(value_of)
            .map(|value| value == self.is_positive)
    }
}

impl Not for SignedConstraint {
    type Output = SignedConstraint;

    fn not(self) -> SignedConstraint {
        SignedConstraint {
            constraint: self.constraint,
            is_positive: !self.is_positive,
        }
    }
}

impl Not for &SignedConstraint {
    type Output = SignedConstraint;

    fn not(self) -> SignedConstraint {
        !self.clone()
    }
}

impl Display for SignedConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.constraint(), self.is_positive) {
            (Constraint::Ule { lhs, rhs }, false) => write!(f, "{rhs} < {lhs}"),
            (constraint, true) => write!(f, "{constraint}"),
            (constraint, false) => write!(f, "~({constraint})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::BitWidth;

    fn width() -> BitWidth {
        BitWidth::new(4).unwrap()
    }

    fn var(id: u32) -> Polynomial {
        Polynomial::var(PVar::new(id), width())
    }

    fn model(var: PVar) -> Option<u64> {
        match var.id() {
            0 => Some(3),
            1 => Some(5),
            _ => None,
        }
    }

    #[test]
    fn negated_ule_is_a_strict_inequality_in_the_other_direction() {
        let literal = SignedConstraint::ult(var(0), var(1));
        let inequality = literal.as_inequality().unwrap();

        assert!(!literal.is_positive());
        assert!(inequality.is_strict);
        assert_eq!(inequality.lhs, var(0));
        assert_eq!(inequality.rhs, var(1));
        assert_eq!(inequality.as_signed_constraint(), &literal);
        assert_eq!(literal.to_string(), "v0 < v1");
    }

    #[test]
    fn double_negation_is_the_identity() {
        let literal = SignedConstraint::ule(var(0), var(1));

        assert_eq!(!!literal.clone(), literal);
        assert_ne!(!&literal, literal);
    }

    #[test]
    fn evaluation_respects_polarity() {
        let le = SignedConstraint::ule(var(0), var(1));

        assert_eq!(le.evaluate(model), Some(true));
        assert_eq!((!&le).evaluate(model), Some(false));
        assert_eq!(SignedConstraint::ule(var(0), var(2)).evaluate(model), None);
    }

    #[test]
    fn overflow_predicate_is_not_an_inequality() {
        let overflow = SignedConstraint::umul_overflow(var(0), var(1));

        assert!(!overflow.is_ule());
        assert!(overflow.as_inequality().is_none());
        assert_eq!(overflow.evaluate(model), Some(false), "3 * 5 < 16");
        assert_eq!(
            SignedConstraint::umul_overflow(var(1), var(1)).evaluate(model),
            Some(true)
        );
    }

    #[test]
    fn equality_with_zero_is_an_upper_bound() {
        let is_zero = SignedConstraint::eq(var(0));

        assert_eq!(is_zero.to_string(), "v0 <= 0");
        assert_eq!((!is_zero).to_string(), "0 < v0");
    }

    #[test]
    fn checked_comparison_rejects_mixed_widths() {
        let wide = Polynomial::var(PVar::new(2), BitWidth::new(8).unwrap());

        assert!(SignedConstraint::try_ule(var(0), wide).is_err());
        assert!(SignedConstraint::try_ule(var(0), var(1)).is_ok());
    }
}
