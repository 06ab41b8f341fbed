use crate::basic_types::BitWidth;
use crate::constraints::SignedConstraint;
use crate::polynomial::Polynomial;
use crate::variables::PVar;

/// Read-only view on the state of the surrounding solver which is needed during saturation.
///
/// The state must not change while it is borrowed by the saturation engine.
pub trait SolverState {
    fn bit_width(&self, var: PVar) -> BitWidth;

    /// The value currently assigned to `var`, if any.
    fn value(&self, var: PVar) -> Option<u64>;

    /// The boolean value assigned to the literal, `None` if the literal is unassigned.
    fn boolean_value(&self, constraint: &SignedConstraint) -> Option<bool>;

    /// An upper bound on the values `var` can still take.
    fn max_viable(&self, var: PVar) -> u64;

    /// The literals which justify the current value of `var`.
    fn justifications(&self, var: PVar) -> &[SignedConstraint];

    /// The polynomial consisting of only `var`.
    fn var(&self, var: PVar) -> Polynomial {
        Polynomial::var(var, self.bit_width(var))
    }

    /// Evaluate `polynomial` under the current assignment.
    fn try_eval(&self, polynomial: &Polynomial) -> Option<u64> {
        polynomial.evaluate(|var| self.value(var))
    }

    /// Returns whether the literal evaluates to false under the current assignment. Note that
    /// this is independent of the boolean value of the literal.
    fn is_currently_false(&self, constraint: &SignedConstraint) -> bool {
        constraint.evaluate(|var| self.value(var)) == Some(false)
    }

    /// Returns whether the literal evaluates to true under the current assignment.
    fn is_currently_true(&self, constraint: &SignedConstraint) -> bool {
        constraint.evaluate(|var| self.value(var)) == Some(true)
    }
}
