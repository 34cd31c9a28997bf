//! Strongly-typed identifiers and the [`Coord3`] type alias.

use std::fmt;

/// A cell coordinate `[x, y, z]` in a cubic lattice.
pub type Coord3 = [usize; 3];

/// Monotonically increasing step counter.
///
/// Incremented each time a field advances one explicit time step.
/// `StepId(0)` is the freshly constructed (or freshly reset) state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The step that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
