//! Grid geometry, cell color specifications, and the painter that turns
//! them into fill operations.
//!
//! # Architecture
//!
//! Painting is separate from rasterization:
//!
//! ```text
//! ColorSpec + GridGeometry → Paint → FillOps → Render
//!                              ↓                  ↓
//!                         (pure data)          Pixels
//! ```
//!
//! This separation allows:
//! - Different backends (software raster, GPU, vector export) to share the
//!   painting logic
//! - Painted output to be compared structurally in tests, without a pixel
//!   buffer in sight
//!
//! Everything in this crate is a pure function of its inputs: the same
//! specs and geometry always produce the same operations, byte for byte.

/// Fill operations produced by painting.
pub mod display_list;
/// Grid and cell rectangle arithmetic.
pub mod geometry;
/// The cell painter.
pub mod painter;
/// Per-cell color specifications.
pub mod spec;

pub use display_list::{ColorStop, FillOp, Gradient};
pub use geometry::{GridGeometry, Point, Rect};
pub use painter::{CellPaint, paint_cell, render};
pub use spec::{ColorSpec, Orientation, SpecKind};
