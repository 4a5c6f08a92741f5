//! LS-8 Run States.
//!
//! The execution loop is a two-state machine: it starts `Running` and moves to
//! `Halted` when HLT retires. A fatal trap ends the run without a state change.

use std::fmt;

/// CPU run state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,

    /// A HLT instruction has executed.
    Halted,
}

impl RunState {
    /// Returns the human-readable name of the run state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Halted => "Halted",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
