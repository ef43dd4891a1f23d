//! Configuration for library callers who need a different layout or code format.
//!
//! The binary always runs with [`Config::default`], which gives the renaming scheme
//! `{row}{column:02}_{region}` over `Regions/ShapeList/Items`. Callers of
//! [`rename_regions_with`](crate::rename_regions_with) can build their own configuration, either
//! directly or from a TOML file via [`Config::load_from`].

use crate::error::{RenameError, Result};
use crate::layout::Layout;
use crate::rename_plan::Naming;
use facet::Facet;
use std::fs;
use std::path::Path;

#[derive(Facet, Clone, Debug)]
/// Layout paths and naming format, each falling back to its default when unset.
pub struct Config {
    #[facet(default = 2)]
    /// Minimum digit count of the column code (zero-padded, never truncated).
    pub pad_width: usize,
    #[facet(default = "_".to_string())]
    /// Text placed between the row/column code and the original region name.
    pub separator: String,
    #[facet(default = "Regions/ShapeList/Items".to_string())]
    /// Path from the document root to the element holding the rows.
    pub rows_path: String,
    #[facet(default = "Children/Items".to_string())]
    /// Path from a row or column to the element holding its children.
    pub children_path: String,
    #[facet(default = "Name".to_string())]
    /// Tag of the child element carrying each node's label.
    pub name_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml("").expect("empty configuration resolves to defaults")
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(config) = Self::from_toml(&contents) {
                return config;
            }
        }
        Self::default()
    }

    /// Parse configuration from TOML source, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::Config`] if the TOML is invalid or a value has the wrong type.
    pub fn from_toml(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| RenameError::Config(e.to_string()))
    }

    #[must_use]
    /// Element paths used to walk rows, columns and regions.
    pub fn layout(&self) -> Layout {
        Layout::new(&self.rows_path, &self.children_path, &self.name_tag)
    }

    #[must_use]
    /// How new region names are composed.
    pub fn naming(&self) -> Naming {
        Naming {
            pad_width: self.pad_width,
            separator: self.separator.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
