//! Program Loader.
//!
//! This module turns LS-8 program source into a memory image. It performs:
//! 1. **File reading:** Reads the program text from disk.
//! 2. **Parsing:** One base-2 numeral per line; blank lines and `#` comments are skipped.
//! 3. **Validation:** Rejects malformed numerals, empty programs, and images larger than memory.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;

/// Radix of program numerals.
const NUMERAL_RADIX: u32 = 2;

/// Optional prefix accepted in front of a numeral.
const BINARY_PREFIX: &str = "0b";

/// Comment marker.
const COMMENT: char = '#';

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise any error
/// from [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&source)?;
    tracing::debug!(path = %path.display(), bytes = program.len(), "parsed program");
    Ok(program)
}

/// Parses program source into bytes, in file order.
///
/// Only the first whitespace-separated token of a line is significant, so
/// trailing annotations such as `10000010 # LDI R0,8` are allowed. A leading
/// `0b` on a numeral is accepted.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] for a token that is not a base-2 numeral
/// fitting in a byte, [`LoadError::Empty`] if no instruction lines remain,
/// and [`LoadError::TooLarge`] if the program exceeds main memory.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if token.starts_with(COMMENT) {
            continue;
        }
        let digits = token.strip_prefix(BINARY_PREFIX).unwrap_or(token);
        let byte = u8::from_str_radix(digits, NUMERAL_RADIX).map_err(|_| LoadError::Malformed {
            line: idx + 1,
            token: token.to_string(),
        })?;
        program.push(byte);
    }

    if program.is_empty() {
        return Err(LoadError::Empty);
    }
    if program.len() > MEMORY_SIZE {
        return Err(LoadError::TooLarge {
            len: program.len(),
            capacity: MEMORY_SIZE,
        });
    }
    Ok(program)
}
