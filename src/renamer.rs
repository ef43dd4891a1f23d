//! The rename operation: load, plan, apply, store.
//!
//! The output path is resolved once up front. Every check runs before the document is written, so
//! a failed run leaves the file on disk untouched. Renaming is not idempotent: running twice over
//! the same file prefixes each region a second time (`A03_Sensor1` becomes `A03A03_Sensor1`).

use crate::config::Config;
use crate::document;
use crate::error::Result;
use crate::rename_plan::RenamePlan;
use std::path::{Path, PathBuf};
use xmltree::Element;

#[derive(Clone, Debug, PartialEq, Eq)]
/// What a completed run did.
pub struct RenameSummary {
    /// File the renamed document was written to.
    pub output: PathBuf,
    /// Rows visited.
    pub rows: usize,
    /// Columns visited.
    pub columns: usize,
    /// Regions renamed.
    pub regions: usize,
}

/// Rename every region in `input` with the default configuration.
///
/// Writes to `output` when given, otherwise overwrites `input`.
///
/// # Errors
///
/// Returns the first I/O, parse, structure or format error encountered; nothing is written in
/// that case.
pub fn rename_regions(input: &Path, output: Option<&Path>) -> Result<RenameSummary> {
    rename_regions_with(input, output, &Config::default())
}

/// Rename every region in `input` using `config` for paths and naming.
///
/// # Errors
///
/// Returns the first I/O, parse, structure or format error encountered; nothing is written in
/// that case.
pub fn rename_regions_with(
    input: &Path,
    output: Option<&Path>,
    config: &Config,
) -> Result<RenameSummary> {
    let output = output.unwrap_or(input).to_path_buf();

    let mut root = document::load(input)?;
    let plan = rename_document(&mut root, config)?;
    document::store(&root, &output)?;

    let summary = RenameSummary {
        output,
        rows: plan.rows,
        columns: plan.columns,
        regions: plan.renames.len(),
    };
    tracing::info!(
        output = %summary.output.display(),
        rows = summary.rows,
        columns = summary.columns,
        regions = summary.regions,
        "renamed regions"
    );
    Ok(summary)
}

/// Rename every region of an in-memory document, returning the plan that was applied.
///
/// The tree is only modified once the whole layout has been read and validated.
///
/// # Errors
///
/// Returns a structure or format error if the layout does not match `config`.
pub fn rename_document(root: &mut Element, config: &Config) -> Result<RenamePlan> {
    let layout = config.layout();
    let rows = layout.read(root)?;
    let plan = RenamePlan::build(&rows, &config.naming());
    if tracing::enabled!(tracing::Level::TRACE) {
        let json = plan.to_json()?;
        tracing::trace!(plan = %json, "rename plan");
    }
    plan.apply(root, &layout)?;
    Ok(plan)
}

#[cfg(test)]
#[path = "tests/renamer.rs"]
mod tests;
