use log::debug;

use super::SaturationContext;
use crate::constraints::SignedConstraint;
use crate::polynomial::Polynomial;
use crate::polysat_assert_advanced;
use crate::polysat_assert_simple;

impl SaturationContext<'_> {
    /// Add premises which imply `Ω*(x, y)`, i.e. that `x * y` does not overflow.
    ///
    /// When the worst-case bounds of the factors already guarantee this, the justifications of
    /// the factors are used. Otherwise the premises are `x <= x_lo` and `y <= y_lo` for a pair
    /// of maximal bounds found by [`omega_bisection`].
    pub(crate) fn push_omega(
        &mut self,
        premises: &mut Vec<SignedConstraint>,
        x: &Polynomial,
        y: &Polynomial,
    ) {
        let width = x.width();
        let x_max = x
            .as_var()
            .map_or(width.max_value(), |var| self.state.max_viable(var));
        let y_max = y
            .as_var()
            .map_or(width.max_value(), |var| self.state.max_viable(var));

        if !width.fits_product(x_max, y_max) {
            self.push_omega_bisect(premises, x, x_max, y, y_max);
            return;
        }

        for factor in [y, x] {
            if let Some(var) = factor.as_var() {
                premises.extend(self.state.justifications(var).iter().cloned());
            }
        }
    }

    /// Add the premises `x <= x_lo` and `y <= y_lo` where `(x_lo, y_lo)` is found by
    /// [`omega_bisection`]. Both factors must evaluate and their product may not overflow.
    pub(crate) fn push_omega_bisect(
        &mut self,
        premises: &mut Vec<SignedConstraint>,
        x: &Polynomial,
        x_max: u64,
        y: &Polynomial,
        y_max: u64,
    ) {
        self.statistics.record_bisection();

        let width = x.width();
        let (Some(x_val), Some(y_val)) = (self.state.try_eval(x), self.state.try_eval(y)) else {
            panic!("the factors of a non-overflow premise must be assigned");
        };

        let (x_lo, y_lo) = omega_bisection(x_val, x_max, y_val, y_max, width.modulus());
        debug!("Ω*({x}, {y}) by bisection: {x} <= {x_lo}, {y} <= {y_lo}");

        let x_bound = SignedConstraint::ule(x.clone(), Polynomial::value(x_lo, width));
        let y_bound = SignedConstraint::ule(y.clone(), Polynomial::value(y_lo, width));
        polysat_assert_advanced!(
            !self.state.is_currently_false(&x_bound) && !self.state.is_currently_false(&y_bound),
            "non-overflow premises must hold in the current assignment"
        );

        premises.push(x_bound);
        premises.push(y_bound);
    }
}

fn product(x: u64, y: u64) -> u128 {
    u128::from(x) * u128::from(y)
}

/// The smallest value in `(lo, hi]` which halves the interval, or `lo` if the interval is empty.
fn upper_midpoint(lo: u64, hi: u64) -> u64 {
    lo + (hi - lo).div_ceil(2)
}

/// Find `(x_lo, y_lo)` in `[x_val, x_max] × [y_val, y_max]` such that `x_lo * y_lo < bound` and
/// neither coordinate can be increased by one without reaching the bound (unless it is at its
/// maximum already).
///
/// The search first moves both coordinates along the diagonal and then raises `x_lo` followed
/// by `y_lo`. The diagonal phase can stop at a point where `x_lo` has no room left, so the pair
/// found need not be the one with the largest `x_lo`: for the values (2, 3), maxima 15 and bound
/// 16 it stops at (3, 4), where 4 * 4 reaches the bound, and the result is (3, 5) rather than
/// (5, 3). Requires `x_val * y_val < bound`.
pub(crate) fn omega_bisection(
    x_val: u64,
    x_max: u64,
    y_val: u64,
    y_max: u64,
    bound: u128,
) -> (u64, u64) {
    polysat_assert_simple!(x_val <= x_max && y_val <= y_max);
    polysat_assert_simple!(product(x_val, y_val) < bound);

    let (mut x_lo, mut x_hi) = (x_val, x_max);
    let (mut y_lo, mut y_hi) = (y_val, y_max);

    while x_lo < x_hi || y_lo < y_hi {
        let x_mid = upper_midpoint(x_lo, x_hi);
        let y_mid = upper_midpoint(y_lo, y_hi);

        if product(x_mid, y_mid) >= bound {
            // At least one of the midpoints lies above its low, as (x_lo, y_lo) is below bound.
            if x_mid > x_lo {
                x_hi = x_mid - 1;
            }
            if y_mid > y_lo {
                y_hi = y_mid - 1;
            }
        } else {
            x_lo = x_mid;
            y_lo = y_mid;
        }
    }

    x_hi = x_max;
    while x_lo < x_hi {
        let x_mid = upper_midpoint(x_lo, x_hi);
        if product(x_mid, y_lo) >= bound {
            x_hi = x_mid - 1;
        } else {
            x_lo = x_mid;
        }
    }

    y_hi = y_max;
    while y_lo < y_hi {
        let y_mid = upper_midpoint(y_lo, y_hi);
        if product(x_lo, y_mid) >= bound {
            y_hi = y_mid - 1;
        } else {
            y_lo = y_mid;
        }
    }

    polysat_assert_simple!(x_val <= x_lo && x_lo <= x_max);
    polysat_assert_simple!(y_val <= y_lo && y_lo <= y_max);
    polysat_assert_simple!(product(x_lo, y_lo) < bound);
    polysat_assert_simple!(x_lo == x_max || product(x_lo + 1, y_lo) >= bound);
    polysat_assert_simple!(y_lo == y_max || product(x_lo, y_lo + 1) >= bound);

    (x_lo, y_lo)
}
