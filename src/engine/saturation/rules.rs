use log::trace;

use super::oracle::is_non_overflow;
use super::shapes::verify_pivot_x_below_z_x;
use super::shapes::verify_pivot_y_below_pivot_z;
use super::shapes::verify_y_below_scaled_pivot;
use super::shapes::verify_y_x_below_pivot_x;
use super::shapes::ClassifiedInequality;
use super::SaturationContext;
use super::SaturationRule;
use crate::constraints::SignedConstraint;
use crate::polynomial::Polynomial;
use crate::polysat_assert_moderate;

impl SaturationContext<'_> {
    /// Try to apply `rule` with `c` as its main literal. The other literals of the core, which
    /// are needed by the rules combining two inequalities, are given by `inequalities`.
    pub(crate) fn try_rule(
        &mut self,
        rule: SaturationRule,
        c: &ClassifiedInequality,
        inequalities: &[ClassifiedInequality],
    ) -> bool {
        match rule {
            SaturationRule::UgtX => self.try_ugt_x(c),
            SaturationRule::UgtY => self.try_ugt_y(c, inequalities),
            SaturationRule::UgtZ => self.try_ugt_z(c, inequalities),
            SaturationRule::YLeAxAndXLeZ => self.try_y_l_ax_and_x_l_z(c, inequalities),
        }
    }

    /// ```text
    /// [x] zx > yx   ==>  Ω*(x, y) \/ z > y
    /// [x] yx <= zx  ==>  Ω*(x, y) \/ y <= z \/ x = 0
    /// ```
    fn try_ugt_x(&mut self, c: &ClassifiedInequality) -> bool {
        let Some((y, z)) = c.pivot_y_below_pivot_z() else {
            return false;
        };
        let inequality = &c.inequality;
        polysat_assert_moderate!(verify_pivot_y_below_pivot_z(self.pivot, inequality, y, z));

        let x = self.state.var(self.pivot);
        if !is_non_overflow(self.state, &x, y) {
            trace!("ugt_x: {x} * {y} may overflow");
            return false;
        }
        let mut premises = vec![];
        if !inequality.is_strict && !self.push_non_zero(&mut premises, &x) {
            return false;
        }
        self.push_omega(&mut premises, &x, y);

        let conclusion = SignedConstraint::inequality(inequality.is_strict, y.clone(), z.clone());
        let critical = c.as_signed_constraint();
        self.propagate(critical, critical, conclusion, premises)
    }

    /// ```text
    /// [y] z' <= y /\ zx > yx   ==>  Ω*(x, y) \/ zx > z'x
    /// [y] z' <= y /\ yx <= zx  ==>  Ω*(x, y) \/ z'x <= zx
    /// [y] z' < y /\ yx <= zx   ==>  Ω*(x, y) \/ z'x < zx \/ x = 0
    /// ```
    fn try_ugt_y(
        &mut self,
        le_y: &ClassifiedInequality,
        inequalities: &[ClassifiedInequality],
    ) -> bool {
        if !le_y.is_below_pivot() {
            return false;
        }

        inequalities.iter().any(|yx_l_zx| {
            yx_l_zx
                .pivot_x_below_z_x()
                .is_some_and(|(x, z)| self.apply_ugt_y(le_y, yx_l_zx, x, z))
        })
    }

    fn apply_ugt_y(
        &mut self,
        le_y: &ClassifiedInequality,
        yx_l_zx: &ClassifiedInequality,
        x: &Polynomial,
        z: &Polynomial,
    ) -> bool {
        polysat_assert_moderate!(le_y.is_below_pivot());
        polysat_assert_moderate!(verify_pivot_x_below_z_x(
            self.pivot,
            &yx_l_zx.inequality,
            x,
            z
        ));

        let y = self.state.var(self.pivot);
        if !is_non_overflow(self.state, x, &y) {
            trace!("ugt_y: {x} * {y} may overflow");
            return false;
        }

        let z_prime = &le_y.inequality.lhs;

        let mut premises = vec![
            le_y.as_signed_constraint().clone(),
            yx_l_zx.as_signed_constraint().clone(),
        ];
        if le_y.inequality.is_strict
            && !yx_l_zx.inequality.is_strict
            && !self.push_non_zero(&mut premises, x)
        {
            return false;
        }
        self.push_omega(&mut premises, x, &y);

        let conclusion = SignedConstraint::inequality(
            yx_l_zx.inequality.is_strict || le_y.inequality.is_strict,
            z_prime * x,
            z * x,
        );
        self.propagate(
            le_y.as_signed_constraint(),
            yx_l_zx.as_signed_constraint(),
            conclusion,
            premises,
        )
    }

    /// ```text
    /// [z] z <= y' /\ zx > yx   ==>  Ω*(x, y') \/ y'x > yx
    /// [z] z <= y' /\ yx <= zx  ==>  Ω*(x, y') \/ yx <= y'x
    /// [z] z < y' /\ yx <= zx   ==>  Ω*(x, y') \/ yx < y'x \/ x = 0
    /// ```
    fn try_ugt_z(
        &mut self,
        z_l_y: &ClassifiedInequality,
        inequalities: &[ClassifiedInequality],
    ) -> bool {
        if z_l_y.pivot_upper_bound().is_none() {
            return false;
        }

        inequalities.iter().any(|yx_l_zx| {
            yx_l_zx
                .y_x_below_pivot_x()
                .is_some_and(|(x, y)| self.apply_ugt_z(z_l_y, yx_l_zx, x, y))
        })
    }

    fn apply_ugt_z(
        &mut self,
        z_l_y: &ClassifiedInequality,
        yx_l_zx: &ClassifiedInequality,
        x: &Polynomial,
        y: &Polynomial,
    ) -> bool {
        let Some(y_prime) = z_l_y.pivot_upper_bound() else {
            return false;
        };
        polysat_assert_moderate!(verify_y_x_below_pivot_x(
            self.pivot,
            &yx_l_zx.inequality,
            x,
            y
        ));

        if !is_non_overflow(self.state, x, y_prime) {
            trace!("ugt_z: {x} * {y_prime} may overflow");
            return false;
        }

        let mut premises = vec![
            z_l_y.as_signed_constraint().clone(),
            yx_l_zx.as_signed_constraint().clone(),
        ];
        if z_l_y.inequality.is_strict
            && !yx_l_zx.inequality.is_strict
            && !self.push_non_zero(&mut premises, x)
        {
            return false;
        }
        self.push_omega(&mut premises, x, y_prime);

        let conclusion = SignedConstraint::inequality(
            z_l_y.inequality.is_strict || yx_l_zx.inequality.is_strict,
            y * x,
            y_prime * x,
        );
        self.propagate(
            z_l_y.as_signed_constraint(),
            yx_l_zx.as_signed_constraint(),
            conclusion,
            premises,
        )
    }

    /// ```text
    /// [x] y <= ax /\ x <= z  ==>  Ω*(a, z) \/ y <= az
    /// [x] y < ax /\ x <= z   ==>  Ω*(a, z) \/ y < az
    /// [x] y <= ax /\ x < z   ==>  Ω*(a, z) \/ y < az \/ a = 0
    /// ```
    fn try_y_l_ax_and_x_l_z(
        &mut self,
        x_l_z: &ClassifiedInequality,
        inequalities: &[ClassifiedInequality],
    ) -> bool {
        if x_l_z.pivot_upper_bound().is_none() {
            return false;
        }

        inequalities.iter().any(|y_l_ax| {
            y_l_ax
                .y_below_scaled_pivot()
                .is_some_and(|(a, y)| self.apply_y_l_ax_and_x_l_z(x_l_z, y_l_ax, a, y))
        })
    }

    fn apply_y_l_ax_and_x_l_z(
        &mut self,
        x_l_z: &ClassifiedInequality,
        y_l_ax: &ClassifiedInequality,
        a: &Polynomial,
        y: &Polynomial,
    ) -> bool {
        let Some(z) = x_l_z.pivot_upper_bound() else {
            return false;
        };
        polysat_assert_moderate!(verify_y_below_scaled_pivot(
            self.pivot,
            &y_l_ax.inequality,
            a,
            y
        ));

        if !is_non_overflow(self.state, a, z) {
            trace!("y_l_ax_and_x_l_z: {a} * {z} may overflow");
            return false;
        }

        let mut premises = vec![
            x_l_z.as_signed_constraint().clone(),
            y_l_ax.as_signed_constraint().clone(),
        ];
        if x_l_z.inequality.is_strict
            && !y_l_ax.inequality.is_strict
            && !self.push_non_zero(&mut premises, a)
        {
            return false;
        }
        self.push_omega(&mut premises, a, z);

        let conclusion = SignedConstraint::inequality(
            x_l_z.inequality.is_strict || y_l_ax.inequality.is_strict,
            y.clone(),
            a * z,
        );
        self.propagate(
            x_l_z.as_signed_constraint(),
            y_l_ax.as_signed_constraint(),
            conclusion,
            premises,
        )
    }

    /// Push the premise `p != 0`, or return false if `p` is zero in the current assignment.
    fn push_non_zero(&self, premises: &mut Vec<SignedConstraint>, p: &Polynomial) -> bool {
        if self.state.try_eval(p) == Some(0) {
            return false;
        }
        premises.push(!SignedConstraint::eq(p.clone()));
        true
    }
}
