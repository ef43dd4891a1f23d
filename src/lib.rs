//! rename-regions: prefix nested region names in XML layouts with their row and column code.
//!
//! A layout document nests regions two levels deep, rows then columns. Each region's `Name` is
//! rewritten as `{row}{column:02}_{region}`, so region `Sensor1` in column `3` of row `A` becomes
//! `A03_Sensor1`.
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod rename_plan;
pub mod renamer;

pub use error::{RenameError, Result};
pub use renamer::{rename_document, rename_regions, rename_regions_with, RenameSummary};
