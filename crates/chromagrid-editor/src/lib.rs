//! Palette editing: the mutation surface an editor UI exposes, minus the
//! UI.
//!
//! [`PaletteEditor`] owns a [`GridDocument`] and applies the operations an
//! editor binds to its controls: append, duplicate, delete, reorder, swap
//! colors, lock, clear, clamp grid dimensions, and randomize. Every
//! mutation leaves the document valid and ready to render or save.
//!
//! Out-of-range indices are rejected with `None`/`false` returns, never
//! panics: a stale index from a racing UI is an expected input here.

/// Deterministic random color generation.
pub mod rng;

use chromagrid_format::GridDocument;
use chromagrid_paint::{ColorSpec, SpecKind};

use crate::rng::SimpleRng;

/// Smallest allowed grid dimension on either axis.
pub const MIN_GRID_DIMENSION: usize = 1;
/// Largest allowed grid dimension on either axis.
pub const MAX_GRID_DIMENSION: usize = 16;

/// Editor over a grid document.
#[derive(Debug, Clone, Default)]
pub struct PaletteEditor {
    document: GridDocument,
}

impl PaletteEditor {
    /// Create an editor over an empty default document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing document, clamping its grid dimensions into the
    /// editable range.
    #[must_use]
    pub fn from_document(mut document: GridDocument) -> Self {
        document.rows = document.rows.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION);
        document.cols = document.cols.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION);
        Self { document }
    }

    /// The current document.
    #[must_use]
    pub const fn document(&self) -> &GridDocument {
        &self.document
    }

    /// Consume the editor, returning the document.
    #[must_use]
    pub fn into_document(self) -> GridDocument {
        self.document
    }

    /// Number of specs in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.document.colors.len()
    }

    /// Whether the palette holds no specs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.document.colors.is_empty()
    }

    /// Append a fresh default spec; returns its index.
    pub fn add(&mut self) -> usize {
        self.push(ColorSpec::default())
    }

    /// Append a specific spec; returns its index.
    pub fn push(&mut self, spec: ColorSpec) -> usize {
        self.document.colors.push(spec);
        self.document.colors.len() - 1
    }

    /// Insert a copy of the spec at `index` directly after it.
    ///
    /// Returns the copy's index, or `None` when `index` is out of range.
    pub fn duplicate(&mut self, index: usize) -> Option<usize> {
        let copy = self.document.colors.get(index)?.clone();
        self.document.colors.insert(index + 1, copy);
        Some(index + 1)
    }

    /// Remove and return the spec at `index`.
    pub fn remove(&mut self, index: usize) -> Option<ColorSpec> {
        if index < self.document.colors.len() {
            Some(self.document.colors.remove(index))
        } else {
            None
        }
    }

    /// Move the spec at `from` so it ends up at `to`, shifting the rest.
    ///
    /// This is the drag-reorder operation. Returns `false` (and leaves the
    /// palette untouched) when either index is out of range.
    pub fn move_spec(&mut self, from: usize, to: usize) -> bool {
        let len = self.document.colors.len();
        if from >= len || to >= len {
            return false;
        }
        let spec = self.document.colors.remove(from);
        self.document.colors.insert(to, spec);
        true
    }

    /// Swap main and secondary colors on the spec at `index`.
    ///
    /// Only kinds that actually use both colors swap; Solid and Shade
    /// cells render from the main color alone, so swapping them would
    /// silently do nothing visible. Returns whether a swap happened.
    pub fn swap_colors(&mut self, index: usize) -> bool {
        if let Some(spec) = self.document.colors.get_mut(index)
            && matches!(
                spec.kind,
                SpecKind::BiChromatic | SpecKind::Linear | SpecKind::Radial
            )
        {
            std::mem::swap(&mut spec.main_color, &mut spec.secondary_color);
            true
        } else {
            false
        }
    }

    /// Set the lock flag on the spec at `index`; returns whether the index
    /// was valid.
    pub fn set_locked(&mut self, index: usize, locked: bool) -> bool {
        if let Some(spec) = self.document.colors.get_mut(index) {
            spec.locked = locked;
            true
        } else {
            false
        }
    }

    /// Flip the lock flag on the spec at `index`; returns the new state.
    pub fn toggle_lock(&mut self, index: usize) -> Option<bool> {
        let spec = self.document.colors.get_mut(index)?;
        spec.locked = !spec.locked;
        Some(spec.locked)
    }

    /// Remove every spec, leaving grid dimensions and attributes alone.
    pub fn clear(&mut self) {
        self.document.colors.clear();
    }

    /// Set grid dimensions, clamping both axes to `[1, 16]`.
    pub fn set_grid_dimensions(&mut self, rows: usize, cols: usize) {
        self.document.rows = rows.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION);
        self.document.cols = cols.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION);
    }

    /// Assign fresh random colors to every unlocked spec.
    ///
    /// Locked specs keep their colors. Kind, angle, and orientation are
    /// never touched, so a randomized palette keeps its structure.
    pub fn randomize(&mut self, rng: &mut SimpleRng) {
        for spec in self.document.colors.iter_mut().filter(|spec| !spec.locked) {
            spec.main_color = rng.next_color();
            spec.secondary_color = rng.next_color();
        }
    }
}
