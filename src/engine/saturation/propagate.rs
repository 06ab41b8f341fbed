use log::trace;

use super::SaturationContext;
use crate::constraints::SignedConstraint;

impl SaturationContext<'_> {
    /// Commit `conclusion`, which is implied by `premises`, to the core.
    ///
    /// The conclusion is only committed when it is relevant to the conflict (one of the critical
    /// literals is false in the current assignment) and it is false itself, either by its boolean
    /// value or under the current assignment. Otherwise the core is not touched.
    pub(crate) fn propagate(
        &mut self,
        crit1: &SignedConstraint,
        crit2: &SignedConstraint,
        conclusion: SignedConstraint,
        premises: Vec<SignedConstraint>,
    ) -> bool {
        if !self.state.is_currently_false(crit1) && !self.state.is_currently_false(crit2) {
            trace!("{conclusion} is not relevant: {crit1} and {crit2} are not false");
            return false;
        }

        let is_bool_false = self.state.boolean_value(&conclusion) == Some(false);
        if !is_bool_false && !self.state.is_currently_false(&conclusion) {
            trace!("{conclusion} is not false");
            return false;
        }

        self.core.keep(crit1);
        self.core.keep(crit2);
        if is_bool_false {
            self.core.insert(!conclusion);
        } else {
            self.core.set(conclusion);
        }

        premises
            .into_iter()
            .for_each(|premise| self.core.insert(premise));

        true
    }
}
