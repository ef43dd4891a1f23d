//! The rename plan records every region rename before any of them touch the tree.
//!
//! Building the plan only reads the validated [`Row`] views, so a structure or format error is
//! reported before the document is modified. Applying the plan then rewrites each region's label
//! in place. Plans serialise to JSON for diagnostics.

use crate::error::{RenameError, Result};
use crate::layout::{set_text, Layout, Row};
use serde::Serialize;
use std::io;
use xmltree::Element;

#[derive(Clone, Debug, PartialEq, Eq)]
/// How a new region name is composed from its ancestors.
pub struct Naming {
    /// Minimum digit count of the column code.
    pub pad_width: usize,
    /// Text between the code and the original region name.
    pub separator: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            pad_width: 2,
            separator: "_".to_string(),
        }
    }
}

impl Naming {
    #[must_use]
    /// Row label followed by the zero-padded column index, e.g. `A03`.
    pub fn region_code(&self, row: &str, column: u64) -> String {
        format!("{row}{}", zero_pad(column, self.pad_width))
    }

    #[must_use]
    /// Full new name for a region, e.g. `A03_Sensor1`.
    pub fn rename(&self, row: &str, column: u64, original: &str) -> String {
        format!(
            "{}{}{original}",
            self.region_code(row, column),
            self.separator
        )
    }
}

#[must_use]
/// Render `n` with at least `width` digits, left-padding with zeros and never truncating.
pub fn zero_pad(n: u64, width: usize) -> String {
    format!("{n:0width$}")
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
/// Location of a region, counting element children only.
pub struct Position {
    /// Index of the row under the rows container.
    pub row: usize,
    /// Index of the column within its row.
    pub column: usize,
    /// Index of the region within its column.
    pub region: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// A single region label replacement.
pub struct Rename {
    /// Where the region sits in the document.
    pub position: Position,
    /// Label of the enclosing row.
    pub row: String,
    /// Label of the enclosing column as written.
    pub column: String,
    /// Region label before renaming.
    pub old_name: String,
    /// Region label after renaming.
    pub new_name: String,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable collection of region renames in document order.
pub struct RenamePlan {
    /// Number of rows visited.
    pub rows: usize,
    /// Number of columns visited across all rows.
    pub columns: usize,
    /// One entry per region.
    pub renames: Vec<Rename>,
}

impl RenamePlan {
    #[must_use]
    /// Plan a rename for every region under `rows`, preserving document order.
    pub fn build(rows: &[Row], naming: &Naming) -> Self {
        let mut plan = Self {
            rows: rows.len(),
            ..Self::default()
        };

        for (r, row) in rows.iter().enumerate() {
            plan.columns += row.columns.len();
            for (c, column) in row.columns.iter().enumerate() {
                for (s, region) in column.regions.iter().enumerate() {
                    plan.renames.push(Rename {
                        position: Position {
                            row: r,
                            column: c,
                            region: s,
                        },
                        row: row.name.clone(),
                        column: column.name.clone(),
                        old_name: region.name.clone(),
                        new_name: naming.rename(&row.name, column.index, &region.name),
                    });
                }
            }
        }

        plan
    }

    /// Write every planned name into `root`, returning how many regions were renamed.
    ///
    /// The region labels are collected in one walk and paired with the plan in document order.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::Structure`] if the layout is missing from `root` and
    /// [`RenameError::PlanMismatch`] if `root` holds a different number of regions than planned.
    pub fn apply(&self, root: &mut Element, layout: &Layout) -> Result<usize> {
        let labels = layout.region_labels_mut(root)?;
        if labels.len() != self.renames.len() {
            return Err(RenameError::PlanMismatch {
                planned: self.renames.len(),
                found: labels.len(),
            });
        }

        for (label, rename) in labels.into_iter().zip(&self.renames) {
            set_text(label, rename.new_name.clone());
            tracing::debug!(from = %rename.old_name, to = %rename.new_name, "renamed region");
        }
        Ok(self.renames.len())
    }

    /// Pretty-printed JSON form of the plan.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::Io`] if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(io::Error::other)?)
    }
}

#[cfg(test)]
#[path = "tests/rename_plan.rs"]
mod tests;
