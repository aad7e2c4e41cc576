//! Pattern catalogs.
//!
//! A catalog resolves a pattern name into a [`Pattern`]. Two are provided:
//! [`JsonCatalog`] reads a `shapes.json` document from disk and
//! [`BuiltinCatalog`] serves the presets compiled into the binary.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Pattern, presets};
use crate::error::{LifeError, Result};

/// Something that can look patterns up by name
pub trait PatternSource {
    /// Resolve `name` into a pattern
    fn load(&self, name: &str) -> Result<Pattern>;

    /// Every pattern name the source knows, sorted
    fn names(&self) -> Result<Vec<String>>;

    /// Every pattern the source knows, in `names` order
    fn patterns(&self) -> Result<Vec<Pattern>> {
        self.names()?.iter().map(|name| self.load(name)).collect()
    }
}

/// Top level of a `shapes.json` document
#[derive(Debug, Deserialize)]
struct ShapesFile {
    #[serde(default)]
    shapes: BTreeMap<String, ShapeEntry>,
}

#[derive(Debug, Deserialize)]
struct ShapeEntry {
    #[serde(default)]
    description: String,
    size: Option<ShapeSize>,
    #[serde(default)]
    cells: Vec<ShapeCell>,
}

#[derive(Debug, Deserialize)]
struct ShapeSize {
    w: usize,
    h: usize,
}

#[derive(Debug, Deserialize)]
struct ShapeCell {
    x: i32,
    y: i32,
}

/// A parsed `shapes.json` document
#[derive(Debug)]
pub struct ShapesDocument {
    origin: String,
    shapes: BTreeMap<String, ShapeEntry>,
}

impl ShapesDocument {
    /// Parse document text. `origin` names the source in error messages.
    pub fn parse(text: &str, origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        let file: ShapesFile = serde_json::from_str(text).map_err(|e| LifeError::CatalogUnreadable {
            path: origin.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { origin, shapes: file.shapes })
    }

    /// Build the named pattern
    pub fn pattern(&self, name: &str) -> Result<Pattern> {
        let entry = self.shapes.get(name).ok_or_else(|| LifeError::PatternNotFound {
            name: name.to_string(),
            catalog: self.origin.clone(),
        })?;

        let cells = entry.cells.iter().map(|c| (c.x, c.y)).collect();
        let pattern = Pattern::new(name, entry.description.clone(), cells);
        Ok(match &entry.size {
            Some(size) => pattern.with_size(size.w, size.h),
            None => pattern,
        })
    }

    pub fn names(&self) -> Vec<String> {
        self.shapes.keys().cloned().collect()
    }

    /// Build every pattern in name order
    pub fn patterns(&self) -> Result<Vec<Pattern>> {
        self.shapes.keys().map(|name| self.pattern(name)).collect()
    }
}

/// Catalog backed by a `shapes.json` file. The file is read on every lookup.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    fn read(&self) -> Result<ShapesDocument> {
        let origin = self.path.display().to_string();
        let text = fs::read_to_string(&self.path).map_err(|e| LifeError::CatalogUnreadable {
            path: origin.clone(),
            reason: e.to_string(),
        })?;
        log::debug!("Read pattern catalog {} ({} bytes)", origin, text.len());
        ShapesDocument::parse(&text, origin)
    }
}

impl PatternSource for JsonCatalog {
    fn load(&self, name: &str) -> Result<Pattern> {
        self.read()?.pattern(name)
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.read()?.names())
    }

    fn patterns(&self) -> Result<Vec<Pattern>> {
        self.read()?.patterns()
    }
}

/// Catalog of the presets shipped with the crate. Names match case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl PatternSource for BuiltinCatalog {
    fn load(&self, name: &str) -> Result<Pattern> {
        presets::all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LifeError::PatternNotFound {
                name: name.to_string(),
                catalog: "built-in presets".to_string(),
            })
    }

    fn names(&self) -> Result<Vec<String>> {
        let mut names: Vec<_> = presets::all_patterns().into_iter().map(|p| p.name).collect();
        names.sort();
        Ok(names)
    }
}
