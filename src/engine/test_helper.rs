#![cfg(any(test, doc))]
//! This module exposes helpers that aid testing of the inference engines. The [`TestSolver`]
//! allows setting up specific scenarios (variable values, viability bounds, justifications and
//! boolean assignments) under which to test the various operations of an engine.
use super::SolverState;
use crate::basic_types::BitWidth;
use crate::basic_types::HashMap;
use crate::constraints::SignedConstraint;
use crate::polysat_assert_simple;
use crate::variables::PVar;

/// A [`SolverState`] whose contents are set explicitly.
#[derive(Default, Debug)]
pub(crate) struct TestSolver {
    widths: Vec<BitWidth>,
    values: Vec<Option<u64>>,
    max_viable: Vec<Option<u64>>,
    justifications: Vec<Vec<SignedConstraint>>,
    boolean_values: HashMap<SignedConstraint, bool>,
}

#[allow(unused, reason = "can be used in a scenario")]
impl TestSolver {
    pub(crate) fn new_variable(&mut self, bits: u32) -> PVar {
        let width = BitWidth::new(bits).expect("valid bit-width for a test variable");
        let var = PVar::new(self.widths.len() as u32);

        self.widths.push(width);
        self.values.push(None);
        self.max_viable.push(None);
        self.justifications.push(vec![]);

        var
    }

    pub(crate) fn assign(&mut self, var: PVar, value: u64) {
        let width = self.widths[var.index()];
        polysat_assert_simple!(
            width.mask(value) == value,
            "{value} does not fit in {width}"
        );
        self.values[var.index()] = Some(value);
    }

    pub(crate) fn unassign(&mut self, var: PVar) {
        self.values[var.index()] = None;
    }

    /// Restrict the values `var` can take to `[0, max]`. Without a bound, every value is viable.
    pub(crate) fn set_max_viable(&mut self, var: PVar, max: u64) {
        self.max_viable[var.index()] = Some(max);
    }

    pub(crate) fn add_justification(&mut self, var: PVar, justification: SignedConstraint) {
        self.justifications[var.index()].push(justification);
    }

    /// Assign a boolean value to the literal; its negation gets the opposite value.
    pub(crate) fn assign_boolean(&mut self, literal: &SignedConstraint, value: bool) {
        let _ = self.boolean_values.insert(!literal, !value);
        let _ = self.boolean_values.insert(literal.clone(), value);
    }
}

impl SolverState for TestSolver {
    fn bit_width(&self, var: PVar) -> BitWidth {
        self.widths[var.index()]
    }

    fn value(&self, var: PVar) -> Option<u64> {
        self.values[var.index()]
    }

    fn boolean_value(&self, constraint: &SignedConstraint) -> Option<bool> {
        self.boolean_values.get(constraint).copied()
    }

    fn max_viable(&self, var: PVar) -> u64 {
        self.max_viable[var.index()].unwrap_or(self.bit_width(var).max_value())
    }

    fn justifications(&self, var: PVar) -> &[SignedConstraint] {
        &self.justifications[var.index()]
    }
}
