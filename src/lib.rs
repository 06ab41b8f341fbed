//! Saturation for conflict analysis over bit-vector polynomials.
//!
//! When the search of a bit-vector solver runs into a conflict, the literals which together are
//! unsatisfiable form the *conflict core*. Before a lemma is learned from the core, the
//! [`Saturation`] engine tries to replace literals which only hold for the current assignment by
//! more general literals. It does so by applying monotonicity rules of multiplication, together
//! with premises which rule out that the products involved overflow:
//!
//! ```
//! use polysat::BitWidth;
//! use polysat::Conflict;
//! use polysat::InferenceEngine;
//! use polysat::PVar;
//! use polysat::Saturation;
//! use polysat::SignedConstraint;
//! use polysat::SolverState;
//!
//! /// Assigns x = 2, y = 5 and z = 3.
//! struct Assignment;
//!
//! impl SolverState for Assignment {
//!     fn bit_width(&self, _: PVar) -> BitWidth {
//!         BitWidth::new(8).unwrap()
//!     }
//!
//!     fn value(&self, var: PVar) -> Option<u64> {
//!         [2, 5, 3].get(var.id() as usize).copied()
//!     }
//!
//!     fn boolean_value(&self, _: &SignedConstraint) -> Option<bool> {
//!         None
//!     }
//!
//!     fn max_viable(&self, _: PVar) -> u64 {
//!         255
//!     }
//!
//!     fn justifications(&self, _: PVar) -> &[SignedConstraint] {
//!         &[]
//!     }
//! }
//!
//! let state = Assignment;
//! let (x, y, z) = (PVar::new(0), PVar::new(1), PVar::new(2));
//!
//! // x*y <= x*z is false under the assignment.
//! let xy_le_xz = SignedConstraint::ule(
//!     &state.var(x) * &state.var(y),
//!     &state.var(x) * &state.var(z),
//! );
//! let mut core = Conflict::new([xy_le_xz.clone()]);
//!
//! let mut saturation = Saturation::default();
//! assert!(saturation.perform(x, &state, &mut core));
//!
//! // The head of the core is now y <= z, which is independent of x.
//! assert_eq!(
//!     core.head(),
//!     Some(&SignedConstraint::ule(state.var(y), state.var(z)))
//! );
//! assert!(core.is_pinned(&xy_le_xz));
//! ```
pub mod asserts;
pub(crate) mod basic_types;
pub(crate) mod constraints;
pub(crate) mod engine;
mod logging;
pub mod polynomial;
pub(crate) mod variables;

#[cfg(test)]
mod tests;

pub use basic_types::BitWidth;
pub use basic_types::PolynomialError;
pub use constraints::Constraint;
pub use constraints::Inequality;
pub use constraints::SignedConstraint;
pub use engine::conflict_analysis::Conflict;
pub use engine::conflict_analysis::ConflictCore;
pub use engine::conflict_analysis::InferenceEngine;
pub use engine::saturation::Saturation;
pub use engine::saturation::SaturationOptions;
pub use engine::saturation::SaturationRule;
pub use engine::saturation::SaturationStatistics;
pub use engine::SolverState;
pub use logging::configure_logging;
pub use polynomial::Polynomial;
pub use variables::PVar;
