//! Error kinds surfaced by the renamer.
//!
//! Each failure mode of a run gets its own variant so the binary can decide how to report it:
//! usage problems exit cleanly with status 1, everything else is fatal.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, RenameError>;

/// Everything that can stop a rename run.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Required arguments were missing; carries the usage line to print.
    #[error("{0}")]
    Usage(String),
    /// The input is not well-formed XML.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// File path (or `<memory>`) the document came from.
        origin: String,
        /// Underlying parser failure.
        #[source]
        source: xml::reader::Error,
    },
    /// An expected element is absent from the tree.
    #[error("missing element `{path}`")]
    Structure {
        /// Slash-joined location of the element that could not be found.
        path: String,
    },
    /// A column name is not a non-negative integer.
    #[error("column name `{value}` is not a non-negative integer")]
    Format {
        /// The offending column name text.
        value: String,
        /// Underlying integer parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
    /// A rename plan does not fit the document it is applied to.
    #[error("plan has {planned} renames but the document has {found} regions")]
    PlanMismatch {
        /// Renames in the plan.
        planned: usize,
        /// Regions found in the document.
        found: usize,
    },
    /// Serialising the tree back to XML failed.
    #[error("failed to write XML: {0}")]
    Write(#[from] xmltree::Error),
    /// A configuration value could not be used.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
