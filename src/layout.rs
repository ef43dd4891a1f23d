//! Typed views over the row → column → region nesting of a layout document.
//!
//! A layout document stores its rows under a fixed path from the root. Each row and each column
//! keeps its children under a second fixed path, and every node carries a label in a `Name`
//! child. [`Layout::read`] walks the tree once in document order and validates every level, so
//! nothing is mutated until the whole structure is known to be sound.

use crate::error::{RenameError, Result};
use std::borrow::Cow;
use xmltree::{Element, XMLNode};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Top-level grouping whose label starts every derived region code.
pub struct Row {
    /// Row label, used verbatim.
    pub name: String,
    /// Columns in document order.
    pub columns: Vec<Column>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Second-level grouping whose integer label becomes the numeric part of the code.
pub struct Column {
    /// Column label as written in the document.
    pub name: String,
    /// Column label parsed as an integer.
    pub index: u64,
    /// Regions in document order.
    pub regions: Vec<Region>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Leaf node whose label gets rewritten.
pub struct Region {
    /// Current display name.
    pub name: String,
}

#[derive(Clone, Debug)]
/// Element paths describing where rows, children and labels live.
pub struct Layout {
    rows_path: Vec<String>,
    children_path: Vec<String>,
    name_tag: String,
}

impl Layout {
    #[must_use]
    /// Build a layout from slash-separated paths.
    pub fn new(rows_path: &str, children_path: &str, name_tag: &str) -> Self {
        Self {
            rows_path: split_path(rows_path),
            children_path: split_path(children_path),
            name_tag: name_tag.to_string(),
        }
    }

    /// Read every row, column and region below `root`.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::Structure`] if a container or label element is missing and
    /// [`RenameError::Format`] if a column label is not a non-negative integer.
    pub fn read(&self, root: &Element) -> Result<Vec<Row>> {
        let rows_trail = self.rows_path.join("/");
        let container = descend(root, &self.rows_path, "")?;

        elements(container)
            .enumerate()
            .map(|(r, row)| -> Result<Row> {
                let row_trail = format!("{rows_trail}[{r}]");
                let name = self.label(row, &row_trail)?.into_owned();
                let columns = self.read_columns(row, &row_trail)?;
                Ok(Row { name, columns })
            })
            .collect()
    }

    fn read_columns(&self, row: &Element, row_trail: &str) -> Result<Vec<Column>> {
        let cols_trail = join(row_trail, &self.children_path.join("/"));
        let container = descend(row, &self.children_path, row_trail)?;

        elements(container)
            .enumerate()
            .map(|(c, column)| -> Result<Column> {
                let col_trail = format!("{cols_trail}[{c}]");
                let name = self.label(column, &col_trail)?.into_owned();
                let index = parse_index(&name)?;
                let regions = self.read_regions(column, &col_trail)?;
                Ok(Column {
                    name,
                    index,
                    regions,
                })
            })
            .collect()
    }

    fn read_regions(&self, column: &Element, col_trail: &str) -> Result<Vec<Region>> {
        let regions_trail = join(col_trail, &self.children_path.join("/"));
        let container = descend(column, &self.children_path, col_trail)?;

        elements(container)
            .enumerate()
            .map(|(s, region)| -> Result<Region> {
                let name = self
                    .label(region, &format!("{regions_trail}[{s}]"))?
                    .into_owned();
                Ok(Region { name })
            })
            .collect()
    }

    fn label<'a>(&self, node: &'a Element, trail: &str) -> Result<Cow<'a, str>> {
        node.get_child(self.name_tag.as_str())
            .map(|name| name.get_text().unwrap_or_default())
            .ok_or_else(|| RenameError::Structure {
                path: join(trail, &self.name_tag),
            })
    }

    /// Mutable access to every region's label element, in document order, from a single walk.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::Structure`] if a container or region label is missing.
    pub fn region_labels_mut<'a>(&self, root: &'a mut Element) -> Result<Vec<&'a mut Element>> {
        let rows_trail = self.rows_path.join("/");
        let children = self.children_path.join("/");
        let mut labels = Vec::new();

        let rows = descend_mut(root, &self.rows_path, "")?;
        for (r, row) in elements_mut(rows).enumerate() {
            let row_trail = format!("{rows_trail}[{r}]");
            let columns = descend_mut(row, &self.children_path, &row_trail)?;
            for (c, column) in elements_mut(columns).enumerate() {
                let col_trail = format!("{}[{c}]", join(&row_trail, &children));
                let regions = descend_mut(column, &self.children_path, &col_trail)?;
                for (s, region) in elements_mut(regions).enumerate() {
                    let region_trail = format!("{}[{s}]", join(&col_trail, &children));
                    let label = region
                        .get_mut_child(self.name_tag.as_str())
                        .ok_or_else(|| RenameError::Structure {
                            path: join(&region_trail, &self.name_tag),
                        })?;
                    labels.push(label);
                }
            }
        }

        Ok(labels)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new("Regions/ShapeList/Items", "Children/Items", "Name")
    }
}

/// Replace the text content of `element`, keeping any non-text children in place.
pub fn set_text(element: &mut Element, text: String) {
    element
        .children
        .retain(|node| !matches!(node, XMLNode::Text(_) | XMLNode::CData(_)));
    element.children.insert(0, XMLNode::Text(text));
}

/// Parse a column label as a non-negative integer, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`RenameError::Format`] for empty, negative or non-numeric labels.
pub fn parse_index(name: &str) -> Result<u64> {
    name.trim().parse::<u64>().map_err(|source| RenameError::Format {
        value: name.to_string(),
        source,
    })
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect()
}

fn join(base: &str, step: &str) -> String {
    if base.is_empty() {
        step.to_string()
    } else {
        format!("{base}/{step}")
    }
}

fn elements(node: &Element) -> impl Iterator<Item = &Element> {
    node.children.iter().filter_map(|child| match child {
        XMLNode::Element(element) => Some(element),
        _ => None,
    })
}

fn elements_mut(node: &mut Element) -> impl Iterator<Item = &mut Element> {
    node.children.iter_mut().filter_map(|child| match child {
        XMLNode::Element(element) => Some(element),
        _ => None,
    })
}

fn descend<'a>(node: &'a Element, steps: &[String], base: &str) -> Result<&'a Element> {
    let mut trail = base.to_string();
    let mut current = node;
    for step in steps {
        trail = join(&trail, step);
        current = current
            .get_child(step.as_str())
            .ok_or_else(|| RenameError::Structure {
                path: trail.clone(),
            })?;
    }
    Ok(current)
}

fn descend_mut<'a>(node: &'a mut Element, steps: &[String], base: &str) -> Result<&'a mut Element> {
    let mut trail = base.to_string();
    let mut current = node;
    for step in steps {
        trail = join(&trail, step);
        current = current
            .get_mut_child(step.as_str())
            .ok_or_else(|| RenameError::Structure {
                path: trail.clone(),
            })?;
    }
    Ok(current)
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
