#![cfg(test)]
//! Scenarios in which each of the saturation rules is applied.

use crate::basic_types::BitWidth;
use crate::constraints::Constraint;
use crate::constraints::SignedConstraint;
use crate::engine::conflict_analysis::Conflict;
use crate::engine::conflict_analysis::ConflictCore;
use crate::engine::conflict_analysis::InferenceEngine;
use crate::engine::saturation::Saturation;
use crate::engine::saturation::SaturationRule;
use crate::engine::test_helper::TestSolver;
use crate::engine::SolverState;
use crate::polynomial::Polynomial;
use crate::variables::PVar;

fn saturate(
    saturation: &mut Saturation,
    solver: &TestSolver,
    pivot: PVar,
    conflict: &mut Conflict,
) -> bool {
    saturation.perform(pivot, solver, conflict)
}

fn assigned(solver: &mut TestSolver, value: u64) -> (PVar, Polynomial) {
    let var = solver.new_variable(8);
    solver.assign(var, value);
    (var, solver.var(var))
}

fn constant(value: u64) -> Polynomial {
    Polynomial::value(value, BitWidth::new(8).unwrap())
}

#[test]
fn ugt_x_on_a_strict_inequality() {
    let mut solver = TestSolver::default();
    let (x, px) = assigned(&mut solver, 3);
    let (y, py) = assigned(&mut solver, 5);
    let (_, pz) = assigned(&mut solver, 4);
    solver.set_max_viable(x, 15);
    solver.set_max_viable(y, 15);
    let x_reason = SignedConstraint::ule(px.clone(), constant(15));
    let y_reason = SignedConstraint::ule(py.clone(), constant(15));
    solver.add_justification(x, x_reason.clone());
    solver.add_justification(y, y_reason.clone());

    // x*y < x*z, i.e. 15 < 12
    let c = SignedConstraint::ult(&px * &py, &px * &pz);
    let mut conflict = Conflict::new([c.clone()]);

    let mut saturation = Saturation::default();
    assert!(saturate(&mut saturation, &solver, x, &mut conflict));

    assert_eq!(
        conflict.constraints(),
        &[
            SignedConstraint::ult(py, pz),
            c.clone(),
            y_reason,
            x_reason
        ]
    );
    assert!(conflict.is_pinned(&c));
    assert_eq!(
        saturation
            .statistics()
            .num_successes_of(SaturationRule::UgtX),
        1
    );
}

#[test]
fn ugt_x_on_a_non_strict_inequality_requires_a_non_zero_pivot() {
    let mut solver = TestSolver::default();
    let (x, px) = assigned(&mut solver, 3);
    let (y, py) = assigned(&mut solver, 5);
    let (_, pz) = assigned(&mut solver, 4);
    solver.set_max_viable(x, 15);
    solver.set_max_viable(y, 15);

    // x*y <= x*z, i.e. 15 <= 12
    let c = SignedConstraint::ule(&px * &py, &px * &pz);
    let mut conflict = Conflict::new([c.clone()]);

    let mut saturation = Saturation::default();
    assert!(saturate(&mut saturation, &solver, x, &mut conflict));

    assert_eq!(
        conflict.constraints(),
        &[
            SignedConstraint::ule(py, pz),
            c,
            !SignedConstraint::eq(px)
        ]
    );
}

#[test]
fn ugt_x_bisects_when_the_viable_ranges_are_large() {
    let mut solver = TestSolver::default();
    let (x, px) = assigned(&mut solver, 3);
    let (_, py) = assigned(&mut solver, 5);
    let (_, pz) = assigned(&mut solver, 4);

    let c = SignedConstraint::ult(&px * &py, &px * &pz);
    let mut conflict = Conflict::new([c.clone()]);

    let mut saturation = Saturation::default();
    assert!(saturate(&mut saturation, &solver, x, &mut conflict));

    assert_eq!(saturation.statistics().num_bisections(), 1);
    assert_eq!(conflict.len(), 4);
    let premises = &conflict.constraints()[2..];
    assert!(premises.iter().all(|premise| solver.is_currently_true(premise)));

    // The bounds leave no room for x*y to overflow.
    let bound_of = |premise: &SignedConstraint| match premise.constraint() {
        Constraint::Ule { rhs, .. } => rhs.constant_value().unwrap(),
        Constraint::UMulOverflow { .. } => unreachable!(),
    };
    let x_bound = bound_of(&premises[0]);
    let y_bound = bound_of(&premises[1]);
    assert!(u128::from(x_bound) * u128::from(y_bound) < 256);
}

#[test]
fn ugt_x_is_not_applied_when_the_product_overflows() {
    let mut solver = TestSolver::default();
    let (x, px) = assigned(&mut solver, 100);
    let (_, py) = assigned(&mut solver, 5);
    let (_, pz) = assigned(&mut solver, 4);

    // x*y <= x*z, i.e. 244 <= 144 after wrapping
    let c = SignedConstraint::ule(&px * &py, &px * &pz);
    let mut conflict = Conflict::new([c.clone()]);

    let mut saturation = Saturation::default();
    assert!(!saturate(&mut saturation, &solver, x, &mut conflict));
    assert_eq!(conflict.constraints(), &[c]);
}

#[test]
fn ugt_y_combines_a_lower_bound_with_a_product() {
    let mut solver = TestSolver::default();
    let (y, py) = assigned(&mut solver, 3);
    let (x, px) = assigned(&mut solver, 2);
    let (_, pz) = assigned(&mut solver, 1);
    let (_, pw) = assigned(&mut solver, 2);
    solver.set_max_viable(x, 15);
    solver.set_max_viable(y, 15);
    let y_reason = SignedConstraint::ule(py.clone(), constant(15));
    solver.add_justification(y, y_reason.clone());

    // w <= y, i.e. 2 <= 3
    let c = SignedConstraint::ule(pw.clone(), py.clone());
    // y*x <= z*x, i.e. 6 <= 2
    let d = SignedConstraint::ule(&py * &px, &pz * &px);
    let mut conflict = Conflict::new([c.clone(), d.clone()]);

    let mut saturation = Saturation::default();
    assert!(saturate(&mut saturation, &solver, y, &mut conflict));

    assert_eq!(
        conflict.constraints(),
        &[
            SignedConstraint::ule(&pw * &px, &pz * &px),
            d.clone(),
            c.clone(),
            y_reason
        ]
    );
    assert!(conflict.is_pinned(&c));
    assert!(conflict.is_pinned(&d));
    assert_eq!(
        saturation
            .statistics()
            .num_successes_of(SaturationRule::UgtY),
        1
    );
}

#[test]
fn ugt_y_is_strict_when_the_lower_bound_is_strict() {
    let mut solver = TestSolver::default();
    let (y, py) = assigned(&mut solver, 3);
    let (x, px) = assigned(&mut solver, 2);
    let (_, pz) = assigned(&mut solver, 1);
    let (_, pw) = assigned(&mut solver, 2);
    solver.set_max_viable(x, 15);
    solver.set_max_viable(y, 15);

    // w < y, i.e. 2 < 3
    let c = SignedConstraint::ult(pw.clone(), py.clone());
    // y*x <= z*x, i.e. 6 <= 2
    let d = SignedConstraint::ule(&py * &px, &pz * &px);
    let mut conflict = Conflict::new([c.clone(), d.clone()]);

    assert!(saturate(&mut Saturation::default(), &solver, y, &mut conflict));
    assert_eq!(
        conflict.constraints(),
        &[
            SignedConstraint::ult(&pw * &px, &pz * &px),
            d,
            c,
            !SignedConstraint::eq(px)
        ]
    );
}

#[test]
fn ugt_y_with_a_strict_lower_bound_is_not_applied_to_a_zero_multiplier() {
    let mut solver = TestSolver::default();
    let (y, py) = assigned(&mut solver, 3);
    let (x, px) = assigned(&mut solver, 0);
    let (_, pz) = assigned(&mut solver, 1);
    let (_, pw) = assigned(&mut solver, 3);
    solver.set_max_viable(x, 15);
    solver.set_max_viable(y, 15);

    // w < y, i.e. 3 < 3
    let c = SignedConstraint::ult(pw, py.clone());
    // y*x <= z*x, i.e. 0 <= 0, from which w*x < z*x does not follow
    let d = SignedConstraint::ule(&py * &px, &pz * &px);
    let mut conflict = Conflict::new([c.clone(), d.clone()]);

    assert!(!saturate(&mut Saturation::default(), &solver, y, &mut conflict));
    assert_eq!(conflict.constraints(), &[c, d]);
}

#[test]
fn ugt_y_skips_partners_which_overflow() {
    let mut solver = TestSolver::default();
    let (y, py) = assigned(&mut solver, 3);
    let (_, px1) = assigned(&mut solver, 100);
    let (x2, px2) = assigned(&mut solver, 2);
    let (_, pz) = assigned(&mut solver, 1);
    let (_, pw) = assigned(&mut solver, 2);
    solver.set_max_viable(x2, 15);
    solver.set_max_viable(y, 15);

    let c = SignedConstraint::ule(pw.clone(), py.clone());
    // y*x1 overflows
    let d1 = SignedConstraint::ule(&py * &px1, &pz * &px1);
    let d2 = SignedConstraint::ule(&py * &px2, &pz * &px2);
    let mut conflict = Conflict::new([c.clone(), d1.clone(), d2.clone()]);

    assert!(saturate(&mut Saturation::default(), &solver, y, &mut conflict));
    assert_eq!(
        conflict.constraints(),
        &[
            SignedConstraint::ule(&pw * &px2, &pz * &px2),
            d1,
            d2.clone(),
            c
        ]
    );
    assert!(conflict.is_pinned(&d2));
}

#[test]
fn ugt_z_combines_an_upper_bound_with_a_product() {
    let mut solver = TestSolver::default();
    let (z, pz) = assigned(&mut solver, 1);
    let (x, px) = assigned(&mut solver, 2);
    let (_, py) = assigned(&mut solver, 4);
    let (y_prime, py_prime) = assigned(&mut solver, 3);
    solver.set_max_viable(x, 15);
    solver.set_max_viable(y_prime, 15);
    let x_reason = SignedConstraint::ule(px.clone(), constant(15));
    solver.add_justification(x, x_reason.clone());

    // z <= y', i.e. 1 <= 3
    let c = SignedConstraint::ule(pz.clone(), py_prime.clone());
    // y*x <= z*x, i.e. 8 <= 2
    let d = SignedConstraint::ule(&py * &px, &pz * &px);
    let mut conflict = Conflict::new([c.clone(), d.clone()]);

    let mut saturation = Saturation::default();
    assert!(saturate(&mut saturation, &solver, z, &mut conflict));

    assert_eq!(
        conflict.constraints(),
        &[
            SignedConstraint::ule(&py * &px, &py_prime * &px),
            d,
            c,
            x_reason
        ]
    );
    assert_eq!(
        saturation
            .statistics()
            .num_successes_of(SaturationRule::UgtZ),
        1
    );
}

#[test]
fn ugt_z_with_a_scaled_cofactor() {
    let mut solver = TestSolver::default();
    let (z, pz) = assigned(&mut solver, 1);
    let (x, px) = assigned(&mut solver, 2);
    let (_, py) = assigned(&mut solver, 4);
    let (y_prime, py_prime) = assigned(&mut solver, 3);
    solver.set_max_viable(x, 15);
    solver.set_max_viable(y_prime, 15);

    let three_x = px.scale(3);
    let c = SignedConstraint::ule(pz.clone(), py_prime.clone());
    // 3*y*x <= 3*z*x, i.e. 24 <= 6
    let d = SignedConstraint::ule(&py * &three_x, &pz * &three_x);
    let mut conflict = Conflict::new([c, d]);

    assert!(saturate(&mut Saturation::default(), &solver, z, &mut conflict));
    assert_eq!(
        conflict.head(),
        Some(&SignedConstraint::ule(&py * &three_x, &py_prime * &three_x))
    );
}

#[test]
fn y_l_ax_and_x_l_z_bounds_the_product_from_above() {
    let mut solver = TestSolver::default();
    let (x, px) = assigned(&mut solver, 3);
    let (a, pa) = assigned(&mut solver, 2);
    let (_, py) = assigned(&mut solver, 5);
    let (z, pz) = assigned(&mut solver, 2);
    solver.set_max_viable(a, 15);
    solver.set_max_viable(z, 15);

    // x <= z, i.e. 3 <= 2
    let c = SignedConstraint::ule(px.clone(), pz.clone());
    // y <= a*x, i.e. 5 <= 6
    let d = SignedConstraint::ule(py.clone(), &pa * &px);
    let mut conflict = Conflict::new([c.clone(), d.clone()]);

    let mut saturation = Saturation::default();
    assert!(saturate(&mut saturation, &solver, x, &mut conflict));

    assert_eq!(
        conflict.constraints(),
        &[SignedConstraint::ule(py, &pa * &pz), d, c]
    );
    assert_eq!(
        saturation
            .statistics()
            .num_successes_of(SaturationRule::YLeAxAndXLeZ),
        1
    );
}

#[test]
fn y_l_ax_and_x_l_z_is_strict_when_the_product_bound_is_strict() {
    let mut solver = TestSolver::default();
    let (x, px) = assigned(&mut solver, 3);
    let (a, pa) = assigned(&mut solver, 2);
    let (_, py) = assigned(&mut solver, 5);
    let (z, pz) = assigned(&mut solver, 2);
    solver.set_max_viable(a, 15);
    solver.set_max_viable(z, 15);

    // x <= z, i.e. 3 <= 2
    let c = SignedConstraint::ule(px.clone(), pz.clone());
    // y < a*x, i.e. 5 < 6
    let d = SignedConstraint::ult(py.clone(), &pa * &px);
    let mut conflict = Conflict::new([c.clone(), d.clone()]);

    assert!(saturate(&mut Saturation::default(), &solver, x, &mut conflict));
    assert_eq!(
        conflict.constraints(),
        &[SignedConstraint::ult(py, &pa * &pz), d, c]
    );
}

#[test]
fn y_l_ax_and_x_l_z_with_a_strict_upper_bound_requires_a_non_zero_factor() {
    let mut solver = TestSolver::default();
    let (x, px) = assigned(&mut solver, 3);
    let (a, pa) = assigned(&mut solver, 2);
    let (_, py) = assigned(&mut solver, 4);
    let (z, pz) = assigned(&mut solver, 2);
    solver.set_max_viable(a, 15);
    solver.set_max_viable(z, 15);

    // x < z, i.e. 3 < 2
    let c = SignedConstraint::ult(px.clone(), pz.clone());
    // y <= a*x, i.e. 4 <= 6
    let d = SignedConstraint::ule(py.clone(), &pa * &px);
    let mut conflict = Conflict::new([c.clone(), d.clone()]);

    assert!(saturate(&mut Saturation::default(), &solver, x, &mut conflict));
    assert_eq!(
        conflict.constraints(),
        &[
            SignedConstraint::ult(py, &pa * &pz),
            d,
            c,
            !SignedConstraint::eq(pa)
        ]
    );
}

#[test]
fn y_l_ax_and_x_l_z_with_a_strict_upper_bound_is_not_applied_to_a_zero_factor() {
    let mut solver = TestSolver::default();
    let (x, px) = assigned(&mut solver, 3);
    let (a, pa) = assigned(&mut solver, 0);
    let (_, py) = assigned(&mut solver, 0);
    let (z, pz) = assigned(&mut solver, 2);
    solver.set_max_viable(a, 15);
    solver.set_max_viable(z, 15);

    // x < z, i.e. 3 < 2
    let c = SignedConstraint::ult(px.clone(), pz);
    // y <= a*x, i.e. 0 <= 0, from which y < a*z does not follow
    let d = SignedConstraint::ule(py, &pa * &px);
    let mut conflict = Conflict::new([c.clone(), d.clone()]);

    assert!(!saturate(&mut Saturation::default(), &solver, x, &mut conflict));
    assert_eq!(conflict.constraints(), &[c, d]);
}

#[test]
fn boolean_false_conclusion_is_added_negated() {
    let mut solver = TestSolver::default();
    let (x, px) = assigned(&mut solver, 3);
    let (y, py) = assigned(&mut solver, 5);
    let (_, pz) = assigned(&mut solver, 4);
    solver.set_max_viable(x, 15);
    solver.set_max_viable(y, 15);

    let conclusion = SignedConstraint::ult(py, pz);
    solver.assign_boolean(&conclusion, false);

    let c = SignedConstraint::ult(&px * &solver.var(y), &px * &solver.var(PVar::new(2)));
    let mut conflict = Conflict::new([c.clone()]);

    assert!(saturate(&mut Saturation::default(), &solver, x, &mut conflict));
    assert_eq!(conflict.constraints(), &[c, !conclusion]);
}
