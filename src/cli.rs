//! Positional argument policy for the `rename-regions` binary.
//!
//! The binary takes `<input_file> [<output_file>]`. Missing the input is a usage error; anything
//! past the second path is ignored with a warning.

use crate::error::{RenameError, Result};
use std::path::{Path, PathBuf};

/// Warning printed when more than two paths are given.
pub const EXTRA_ARGS_WARNING: &str = "Too many arguments, only the first two will be used";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Input and output resolved from the command line.
pub struct Invocation {
    /// Document to read.
    pub input: PathBuf,
    /// Where to write the result; `None` means overwrite the input.
    pub output: Option<PathBuf>,
    /// How many trailing arguments were dropped.
    pub ignored: usize,
}

impl Invocation {
    /// Resolve positional paths for the program called `program`.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::Usage`] carrying the usage line if no input path is given.
    pub fn from_paths(program: &str, paths: Vec<PathBuf>) -> Result<Self> {
        let ignored = paths.len().saturating_sub(2);
        let mut paths = paths.into_iter();
        let input = paths.next().ok_or_else(|| RenameError::Usage(usage(program)))?;
        let output = paths.next();
        Ok(Self {
            input,
            output,
            ignored,
        })
    }

    #[must_use]
    /// The output path as passed to the renamer.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

#[must_use]
/// Usage line for `program`.
pub fn usage(program: &str) -> String {
    format!("Usage: {program} <input_file> [<output_file>]")
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;
