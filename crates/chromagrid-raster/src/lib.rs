//! Software raster backend for the grid renderer.
//!
//! Executes painted fill operations to an RGBA pixel buffer. This is the
//! final stage of the pipeline:
//!
//! ```text
//! ColorSpec + GridGeometry → Paint → Render
//!                              ↓        ↓
//!                           FillOps → Pixels
//! ```
//!
//! The rasterizer knows nothing about specs or grids; it fills rectangles
//! and evaluates gradients, in order, and that is all. Fills are opaque,
//! so execution order alone determines the result and identical inputs
//! always produce byte-identical buffers.

/// Per-pixel gradient evaluation.
pub mod gradient;
/// The fill-operation executor.
pub mod renderer;

pub use renderer::Renderer;
