use super::ConflictCore;
use crate::engine::SolverState;
use crate::variables::PVar;

/// An inference engine derives new literals from a conflict core in order to generalise the
/// explanation of the conflict.
pub trait InferenceEngine {
    /// Attempt to derive a literal which explains the conflict in terms of `pivot`. On success
    /// the core is updated and `true` is returned; otherwise the core is left untouched.
    fn perform(
        &mut self,
        pivot: PVar,
        state: &dyn SolverState,
        core: &mut dyn ConflictCore,
    ) -> bool;
}
