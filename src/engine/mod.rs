pub(crate) mod conflict_analysis;
pub(crate) mod saturation;

mod solver_state;
pub(crate) mod test_helper;

pub use solver_state::SolverState;
