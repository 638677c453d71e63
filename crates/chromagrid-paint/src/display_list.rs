//! Fill operations - the output of painting a cell.
//!
//! Fill operations are backend-neutral drawing commands: a backend that
//! can fill a rectangle with a flat color or evaluate a two-point gradient
//! can execute them without knowing how a spec's colors were derived.
//! Operations within a cell are ordered; executing them in sequence
//! produces the cell's final appearance.

use chromagrid_color::Rgb;

use crate::geometry::{Point, Rect};

/// A single gradient stop: a color pinned at a normalized offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, `[0, 1]`.
    pub offset: f32,
    /// Color at this position.
    pub color: Rgb,
}

impl ColorStop {
    /// Create a stop.
    #[must_use]
    pub const fn new(offset: f32, color: Rgb) -> Self {
        Self { offset, color }
    }
}

/// Geometry of a gradient fill.
///
/// Stops are emitted in ascending offset order; offsets that fall outside
/// the stop range clamp to the nearest edge stop (pad spread).
#[derive(Debug, Clone, PartialEq)]
pub enum Gradient {
    /// Interpolate along the segment from `start` to `end`.
    Linear {
        /// Axis start, where the offset is 0.
        start: Point,
        /// Axis end, where the offset is 1.
        end: Point,
        /// Stops in ascending offset order.
        stops: Vec<ColorStop>,
    },
    /// Interpolate by distance from `center`: offset 0 at the center,
    /// offset 1 at `radius`.
    Radial {
        /// Gradient center.
        center: Point,
        /// Distance at which the offset reaches 1.
        radius: f32,
        /// Stops in ascending offset order.
        stops: Vec<ColorStop>,
    },
}

/// One drawing command for (part of) a cell's area.
#[derive(Debug, Clone, PartialEq)]
pub enum FillOp {
    /// Fill `rect` with a single opaque color.
    Flat {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Rgb,
    },
    /// Fill `rect` by evaluating `gradient` across it.
    Gradient {
        /// Area to fill.
        rect: Rect,
        /// Gradient to evaluate.
        gradient: Gradient,
    },
}
