//! Program Loader.
//!
//! This module reads LS-8 program images. It performs:
//! 1. **Parsing:** One 8-bit binary literal per line; `#` starts a comment;
//!    blank and comment-only lines are skipped.
//! 2. **File loading:** Reads a program file from disk, reporting a missing
//!    file distinctly from other I/O failures.
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
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;

/// Parses program text into a byte image.
///
/// # Errors
///
/// Returns [`LoadError::InvalidLiteral`] for a line that is not a binary
/// number fitting in eight bits, or [`LoadError::ProgramTooLarge`] if the
/// image has more than 256 bytes.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let code = line.split_once('#').map_or(line, |(code, _)| code).trim();
        if code.is_empty() {
            continue;
        }

        let byte = u8::from_str_radix(code, 2).map_err(|_| LoadError::InvalidLiteral {
            line: idx + 1,
            text: code.to_string(),
        })?;
        image.push(byte);
    }

    if image.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge {
            len: image.len(),
            capacity: MEMORY_SIZE,
        });
    }

    Ok(image)
}

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the `.ls8` text file.
///
/// # Errors
///
/// Returns [`LoadError::ProgramNotFound`] if the file does not exist,
/// [`LoadError::Io`] for any other read failure, and the errors of
/// [`parse_program`] for malformed content.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::ProgramNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let image = parse_program(&source)?;
    debug!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}
