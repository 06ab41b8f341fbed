//! Multivariate polynomials over the ring of bit-vectors `Z / 2^width`.
//!
//! A [`Polynomial`] is kept in a canonical form: terms are sorted by decreasing monomial (see
//! [`Monomial`]), no two terms share a monomial and every coefficient is non-zero and reduced
//! modulo `2^width`. Consequently the derived structural equality is polynomial equality, which
//! is what the shape matchers of the saturation rules rely on.
mod monomial;

use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

pub use monomial::Monomial;
pub use monomial::VarPower;

use crate::basic_types::BitWidth;
use crate::basic_types::HashMap;
use crate::basic_types::PolynomialError;
use crate::polysat_assert_eq_simple;
use crate::polysat_assert_extreme;
use crate::variables::PVar;

/// A coefficient multiplied by a monomial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    pub coeff: u64,
    pub monomial: Monomial,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    width: BitWidth,
    terms: Vec<Term>,
}

impl Polynomial {
    pub fn zero(width: BitWidth) -> Polynomial {
        Polynomial {
            width,
            terms: vec![],
        }
    }

    /// The constant polynomial `value mod 2^width`.
    pub fn value(value: u64, width: BitWidth) -> Polynomial {
        Polynomial::from_terms(width, [(value, Monomial::unit())])
    }

    pub fn var(var: PVar, width: BitWidth) -> Polynomial {
        Polynomial::from_terms(width, [(1, Monomial::from_var(var))])
    }

    /// Build a polynomial from arbitrary terms. Terms sharing a monomial are summed and
    /// coefficients are reduced modulo `2^width`.
    pub fn from_terms(
        width: BitWidth,
        terms: impl IntoIterator<Item = (u64, Monomial)>,
    ) -> Polynomial {
        let mut coefficients: HashMap<Monomial, u64> = HashMap::default();
        for (coeff, monomial) in terms {
            let entry = coefficients.entry(monomial).or_insert(0);
            *entry = width.mask(entry.wrapping_add(coeff));
        }

        let mut terms: Vec<Term> = coefficients
            .into_iter()
            .filter(|&(_, coeff)| coeff != 0)
            .map(|(monomial, coeff)| Term { coeff, monomial })
            .collect();
        terms.sort_by(|lhs, rhs| rhs.monomial.cmp(&lhs.monomial));

        polysat_assert_extreme!(terms
            .windows(2)
            .all(|pair| pair[0].monomial > pair[1].monomial));

        Polynomial { width, terms }
    }

    pub fn width(&self) -> BitWidth {
        self.width
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// If the polynomial is a constant, returns its value.
    pub fn constant_value(&self) -> Option<u64> {
        match self.terms.as_slice() {
            [] => Some(0),
            [term] if term.monomial.is_unit() => Some(term.coeff),
            _ => None,
        }
    }

    /// If the polynomial is `coeff * var` for a non-zero `coeff`, returns `(coeff, var)`.
    ///
    /// Note that there is no constant term in a unary polynomial.
    pub fn unary(&self) -> Option<(u64, PVar)> {
        match self.terms.as_slice() {
            [term] => term.monomial.as_var().map(|var| (term.coeff, var)),
            _ => None,
        }
    }

    pub fn is_unary(&self) -> bool {
        self.unary().is_some()
    }

    /// If the polynomial is a single variable, returns that variable.
    pub fn as_var(&self) -> Option<PVar> {
        match self.unary() {
            Some((1, var)) => Some(var),
            _ => None,
        }
    }

    /// The highest exponent of `var` in any term.
    pub fn degree(&self, var: PVar) -> u32 {
        self.terms
            .iter()
            .map(|term| term.monomial.degree(var))
            .max()
            .unwrap_or(0)
    }

    /// The variables occurring in the polynomial, sorted and without duplicates.
    pub fn vars(&self) -> Vec<PVar> {
        let mut vars: Vec<PVar> = self
            .terms
            .iter()
            .flat_map(|term| term.monomial.vars().iter().map(|var_power| var_power.var))
            .collect();
        vars.sort();
        vars.dedup();
        vars
    }

    /// Returns `q` such that `self == var^degree * q`, if such a `q` exists.
    pub fn factor(&self, var: PVar, degree: u32) -> Option<Polynomial> {
        let terms = self
            .terms
            .iter()
            .map(|term| {
                term.monomial
                    .div_var(var, degree)
                    .map(|monomial| (term.coeff, monomial))
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Polynomial::from_terms(self.width, terms))
    }

    /// Returns `q` such that `value * q == self` modulo `2^width`.
    ///
    /// Writing `value = 2^k * odd`, the division succeeds when every coefficient is divisible by
    /// `2^k`; the odd part is divided out through its modular inverse. Division by zero fails.
    pub fn try_div(&self, value: u64) -> Option<Polynomial> {
        let value = self.width.mask(value);
        if value == 0 {
            return None;
        }

        let twos = value.trailing_zeros();
        let inverse = inverse_of_odd(value >> twos);

        let terms = self
            .terms
            .iter()
            .map(|term| {
                (term.coeff.trailing_zeros() >= twos).then(|| {
                    (
                        (term.coeff >> twos).wrapping_mul(inverse),
                        term.monomial.clone(),
                    )
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Polynomial::from_terms(self.width, terms))
    }

    /// Multiply every coefficient by `value`.
    pub fn scale(&self, value: u64) -> Polynomial {
        Polynomial::from_terms(
            self.width,
            self.terms
                .iter()
                .map(|term| (term.coeff.wrapping_mul(value), term.monomial.clone())),
        )
    }

    /// Evaluate the polynomial, where `value_of` provides the values of variables. Returns
    /// `None` when some variable has no value.
    pub fn evaluate(&self, mut value_of: impl FnMut(PVar) -> Option<u64>) -> Option<u64> {
        let mut result = 0_u64;

        for term in &self.terms {
            let mut product = term.coeff;
            for var_power in term.monomial.vars() {
                let value = value_of(var_power.var)?;
                product = product.wrapping_mul(value.wrapping_pow(var_power.power));
            }
            result = result.wrapping_add(product);
        }

        // Wrapping arithmetic on u64 is arithmetic modulo 2^64, of which 2^width is a divisor.
        Some(self.width.mask(result))
    }

    pub fn checked_add(&self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.check_width(other)?;
        Ok(self.add_unchecked(other))
    }

    pub fn checked_mul(&self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.check_width(other)?;
        Ok(self.mul_unchecked(other))
    }

    pub(crate) fn check_width(&self, other: &Polynomial) -> Result<(), PolynomialError> {
        if self.width != other.width {
            return Err(PolynomialError::WidthMismatch {
                lhs: self.width,
                rhs: other.width,
            });
        }

        Ok(())
    }

    fn add_unchecked(&self, other: &Polynomial) -> Polynomial {
        Polynomial::from_terms(
            self.width,
            self.terms
                .iter()
                .chain(other.terms.iter())
                .map(|term| (term.coeff, term.monomial.clone())),
        )
    }

    fn mul_unchecked(&self, other: &Polynomial) -> Polynomial {
        let products = self.terms.iter().flat_map(|lhs| {
            other.terms.iter().map(move |rhs| {
                (
                    lhs.coeff.wrapping_mul(rhs.coeff),
                    lhs.monomial.multiply(&rhs.monomial),
                )
            })
        });

        Polynomial::from_terms(self.width, products)
    }
}

/// The inverse of an odd number modulo `2^64`, by Newton iteration. Every iteration doubles the
/// number of correct low bits, starting from the three bits for which `odd * odd == 1`.
fn inverse_of_odd(odd: u64) -> u64 {
    polysat_assert_eq_simple!(odd & 1, 1, "only odd numbers are invertible");

    let mut inverse = odd;
    for _ in 0..5 {
        inverse = inverse.wrapping_mul(2_u64.wrapping_sub(odd.wrapping_mul(inverse)));
    }
    inverse
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        polysat_assert_eq_simple!(self.width, rhs.width, "adding polynomials of different widths");
        self.add_unchecked(rhs)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        polysat_assert_eq_simple!(
            self.width,
            rhs.width,
            "multiplying polynomials of different widths"
        );
        self.mul_unchecked(rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(u64::MAX)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &(-rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            if term.monomial.is_unit() {
                write!(f, "{}", term.coeff)?;
            } else if term.coeff == 1 {
                write!(f, "{}", term.monomial)?;
            } else {
                write!(f, "{}*{}", term.coeff, term.monomial)?;
            }
        }

        Ok(())
    }
}
