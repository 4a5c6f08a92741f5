//! Trap and load error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Trap Representation:** Fatal execution faults raised by the core.
//! 2. **Load Errors:** Failures turning a program file into a memory image.
//! 3. **Simulator Errors:** The union surfaced by the top-level driver, including host I/O.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Index space an out-of-range access was made against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    /// The 256-byte main memory.
    Memory,
    /// The eight-entry register file.
    Register,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory address"),
            Self::Register => write!(f, "register index"),
        }
    }
}

/// Fatal execution faults.
///
/// Every trap stops the current run; there is no handler vector and no
/// partial-state rollback.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Memory or register access outside the valid bounds.
    #[error("{space} {index:#04x} out of range")]
    OutOfRange {
        /// Which index space was accessed.
        space: Space,
        /// The offending index.
        index: usize,
    },

    /// Opcode byte absent from the dispatch table.
    #[error("illegal instruction {opcode:#010b} at {pc:#04x}")]
    IllegalInstruction {
        /// The undecodable opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },

    /// The ALU was asked for an operation it does not implement.
    #[error("unsupported ALU operation '{0}'")]
    UnsupportedOperation(String),
}

impl Trap {
    /// Shorthand for a memory-space [`Trap::OutOfRange`].
    pub const fn memory(index: usize) -> Self {
        Self::OutOfRange {
            space: Space::Memory,
            index,
        }
    }

    /// Shorthand for a register-space [`Trap::OutOfRange`].
    pub const fn register(index: usize) -> Self {
        Self::OutOfRange {
            space: Space::Register,
            index,
        }
    }
}

/// Failures while loading a program, reported before execution starts.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file is missing or unreadable.
    #[error("couldn't open {}: {source}", .path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying host error.
        #[source]
        source: io::Error,
    },

    /// A program line is not a base-2 numeral that fits in a byte.
    #[error("invalid number on line {line}: {token}")]
    Malformed {
        /// One-based source line.
        line: usize,
        /// The rejected token.
        token: String,
    },

    /// No instruction lines remained after dropping blanks and comments.
    #[error("program was empty")]
    Empty,

    /// The image does not fit in main memory.
    #[error("program is {len} bytes but memory holds {capacity}")]
    TooLarge {
        /// Image length in bytes.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },
}

/// Errors surfaced by [`crate::Simulator`].
#[derive(Debug, Error)]
pub enum SimError {
    /// The core raised a fatal trap.
    #[error(transparent)]
    Trap(#[from] Trap),

    /// Writing console output to the host failed.
    #[error("console output failed: {0}")]
    Io(#[from] io::Error),
}
