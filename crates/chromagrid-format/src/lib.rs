//! The `.cgg` container: a JSON document holding grid dimensions, the
//! ordered color specs, and passthrough attribute metadata.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document type** - the in-memory form of a saved grid
//! - **Load/save** - JSON (de)serialization plus file I/O
//! - **Defaults** - absent optional fields take documented fallbacks
//!
//! A document without a `colors` array fails to load outright; everything
//! else is optional. The attribute fields (`globalAttributes`,
//! `visualizeAttribute`) are round-tripped verbatim and never interpreted
//! by the renderer.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use chromagrid_color::Rgb;
use chromagrid_paint::ColorSpec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid rows/cols used when a document does not specify them.
pub const DEFAULT_GRID_DIMENSION: usize = 4;
/// Attribute name visualized when a document does not specify one.
pub const DEFAULT_VISUALIZE_ATTRIBUTE: &str = "albedo";

/// Error produced when a `.cgg` document cannot be loaded or saved.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The JSON is malformed or lacks the required `colors` array.
    #[error("invalid .cgg file: {0}")]
    InvalidFileFormat(#[from] serde_json::Error),
    /// The file could not be read or written.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A loaded or in-progress grid document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDocument {
    /// Number of grid rows.
    #[serde(default = "default_grid_dimension")]
    pub rows: usize,
    /// Number of grid columns.
    #[serde(default = "default_grid_dimension")]
    pub cols: usize,
    /// Ordered color specs, one per cell. The only required field.
    pub colors: Vec<ColorSpec>,
    /// Named colors attached to the document as a whole. Stored and
    /// round-tripped; the renderer never reads them. A `BTreeMap` keeps
    /// saved documents stable across runs.
    #[serde(default)]
    pub global_attributes: BTreeMap<String, Rgb>,
    /// Which attribute the editor visualizes. Stored verbatim.
    #[serde(default = "default_visualize_attribute")]
    pub visualize_attribute: String,
}

fn default_grid_dimension() -> usize {
    DEFAULT_GRID_DIMENSION
}

fn default_visualize_attribute() -> String {
    DEFAULT_VISUALIZE_ATTRIBUTE.to_string()
}

impl Default for GridDocument {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_DIMENSION,
            cols: DEFAULT_GRID_DIMENSION,
            colors: Vec::new(),
            global_attributes: BTreeMap::new(),
            visualize_attribute: DEFAULT_VISUALIZE_ATTRIBUTE.to_string(),
        }
    }
}

impl GridDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidFileFormat`] when the text is not
    /// valid JSON or the `colors` array is missing. There is no partial
    /// load: a structurally invalid document yields nothing.
    pub fn from_json(text: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize as pretty-printed JSON, the on-disk `.cgg` form.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidFileFormat`] if serialization fails;
    /// with string keys throughout this does not happen in practice, but
    /// the contract stays honest.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a document from a `.cgg` file.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Io`] when the file cannot be read and
    /// [`FormatError::InvalidFileFormat`] when its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, FormatError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Save the document as a `.cgg` file.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), FormatError> {
        Ok(fs::write(path, self.to_json()?)?)
    }
}
