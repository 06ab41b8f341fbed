//! Saturation derives stronger literals from a conflict core which contains inequalities over
//! polynomials in which the pivot variable occurs as a factor.
//!
//! The rules are those of non-linear real arithmetic (multiplication is monotone), which only
//! hold under modular arithmetic when the products involved do not overflow. Every inferred
//! literal is therefore accompanied by premises, see [`SaturationContext::push_omega`], which
//! imply that there is no overflow.
mod omega;
mod options;
mod oracle;
mod propagate;
mod rules;
mod shapes;
mod statistics;

use log::debug;
pub use options::SaturationOptions;
pub use options::SaturationRule;
pub use statistics::SaturationStatistics;

use self::shapes::ClassifiedInequality;
use super::conflict_analysis::ConflictCore;
use super::conflict_analysis::InferenceEngine;
use super::SolverState;
use crate::variables::PVar;

/// The state which is available to the saturation rules during one call to
/// [`Saturation::perform`].
#[allow(missing_debug_implementations)]
pub(crate) struct SaturationContext<'a> {
    pub(crate) state: &'a dyn SolverState,
    pub(crate) core: &'a mut dyn ConflictCore,
    pub(crate) pivot: PVar,
    pub(crate) statistics: &'a mut SaturationStatistics,
}

/// The saturation inference engine.
///
/// For every inequality in the core (in core order), the enabled rules are tried in the order
/// given by [`SaturationRule::ORDER`]. The first rule which commits a literal to the core ends
/// the attempt.
#[derive(Debug, Default)]
pub struct Saturation {
    options: SaturationOptions,
    statistics: SaturationStatistics,
}

impl Saturation {
    pub fn new(options: SaturationOptions) -> Saturation {
        Saturation {
            options,
            statistics: SaturationStatistics::default(),
        }
    }

    pub fn options(&self) -> &SaturationOptions {
        &self.options
    }

    pub fn statistics(&self) -> &SaturationStatistics {
        &self.statistics
    }
}

impl InferenceEngine for Saturation {
    fn perform(
        &mut self,
        pivot: PVar,
        state: &dyn SolverState,
        core: &mut dyn ConflictCore,
    ) -> bool {
        self.statistics.record_call();

        // The core is only modified by a successful commit, after which we stop.
        let inequalities = core
            .constraints()
            .iter()
            .filter_map(|constraint| constraint.as_inequality())
            .map(|inequality| ClassifiedInequality::new(pivot, inequality))
            .collect::<Vec<_>>();

        let mut context = SaturationContext {
            state,
            core,
            pivot,
            statistics: &mut self.statistics,
        };

        for c in &inequalities {
            for rule in SaturationRule::ORDER {
                if !self.options.is_enabled(rule) {
                    continue;
                }

                if context.try_rule(rule, c, &inequalities) {
                    context.statistics.record_success(rule);
                    debug!("saturation on {pivot}: {rule} applied to {}", c.inequality);
                    return true;
                }
            }
        }

        false
    }
}
