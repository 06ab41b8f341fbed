use std::fmt::Display;
use std::fmt::Formatter;

/// Identifies a bit-vector unknown. The bit-width of the variable is owned by the solver which
/// created it, see [`crate::SolverState::bit_width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PVar(u32);

impl PVar {
    pub const fn new(id: u32) -> PVar {
        PVar(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }

    #[allow(unused, reason = "only the test solver stores data per variable")]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for PVar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}
