//! The cell painter: one spec plus one rectangle in, fill operations out.
//!
//! All numeric choices here are load-bearing: palettes saved years apart
//! must keep rendering to the same image. The split arithmetic and the
//! gradient axis construction are fixed contracts, not tunables.

use chromagrid_color::Rgb;

use crate::display_list::{ColorStop, FillOp, Gradient};
use crate::geometry::{GridGeometry, Point, Rect};
use crate::spec::{ColorSpec, Orientation, SpecKind};

/// Blend-toward-white factor for the top of a shade ramp.
const SHADE_LIGHTEN: f32 = 0.4;
/// Brightness retained at the bottom of a shade ramp.
const SHADE_DARKEN: f32 = 0.6;

/// Fill operations for one rendered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellPaint {
    /// Index of the spec in the input sequence.
    pub index: usize,
    /// Fill operations in painting order.
    pub ops: Vec<FillOp>,
}

/// Paint every spec that fits the grid.
///
/// Specs at indices beyond the grid's capacity are silently dropped from
/// the tail; the result holds exactly `min(specs.len(), capacity)` cells.
#[must_use]
pub fn render(specs: &[ColorSpec], geometry: &GridGeometry) -> Vec<CellPaint> {
    specs
        .iter()
        .enumerate()
        .filter_map(|(index, spec)| {
            geometry.cell_rect(index).map(|rect| CellPaint {
                index,
                ops: paint_cell(rect, spec),
            })
        })
        .collect()
}

/// Produce the fill operations for one cell rectangle.
#[must_use]
pub fn paint_cell(rect: Rect, spec: &ColorSpec) -> Vec<FillOp> {
    match spec.kind {
        SpecKind::Solid => vec![FillOp::Flat {
            rect,
            color: spec.main_color,
        }],
        SpecKind::BiChromatic => paint_bi_chromatic(rect, spec),
        SpecKind::Linear => vec![paint_linear(rect, spec)],
        SpecKind::Radial => vec![paint_radial(rect, spec)],
        SpecKind::Shade => vec![paint_shade(rect, spec.main_color)],
    }
}

/// Split the cell into two flat tones along the spec's orientation.
///
/// The first half takes the floor of the half extent and the second the
/// remainder, so odd extents leave neither a gap nor an overlap.
fn paint_bi_chromatic(rect: Rect, spec: &ColorSpec) -> Vec<FillOp> {
    let (first, second) = match spec.orientation {
        Orientation::Horizontal => {
            let first_width = (rect.width / 2.0).floor();
            (
                Rect::new(rect.x, rect.y, first_width, rect.height),
                Rect::new(
                    rect.x + first_width,
                    rect.y,
                    rect.width - first_width,
                    rect.height,
                ),
            )
        }
        Orientation::Vertical => {
            let first_height = (rect.height / 2.0).floor();
            (
                Rect::new(rect.x, rect.y, rect.width, first_height),
                Rect::new(
                    rect.x,
                    rect.y + first_height,
                    rect.width,
                    rect.height - first_height,
                ),
            )
        }
    };
    vec![
        FillOp::Flat {
            rect: first,
            color: spec.main_color,
        },
        FillOp::Flat {
            rect: second,
            color: spec.secondary_color,
        },
    ]
}

/// Two-stop linear gradient along the spec's angle.
///
/// The axis comes from rotating a unit vector by the angle about the cell
/// center, then scaling its x component by half the width and its y
/// component by half the height independently. The endpoints therefore lie
/// on the rectangle's inscribed ellipse rather than a fixed-length rotated
/// line. Every image this program has ever produced depends on that exact
/// projection; do not "correct" it to a true rotated axis.
fn paint_linear(rect: Rect, spec: &ColorSpec) -> FillOp {
    let center = rect.center();
    let radians = f32::from(spec.angle_degrees).to_radians();
    let dx = radians.cos() * rect.width / 2.0;
    let dy = radians.sin() * rect.height / 2.0;
    FillOp::Gradient {
        rect,
        gradient: Gradient::Linear {
            start: Point::new(center.x - dx, center.y - dy),
            end: Point::new(center.x + dx, center.y + dy),
            stops: vec![
                ColorStop::new(0.0, spec.main_color),
                ColorStop::new(1.0, spec.secondary_color),
            ],
        },
    }
}

/// Two-stop radial gradient from the cell center to its shorter half
/// extent.
fn paint_radial(rect: Rect, spec: &ColorSpec) -> FillOp {
    FillOp::Gradient {
        rect,
        gradient: Gradient::Radial {
            center: rect.center(),
            radius: rect.width.min(rect.height) / 2.0,
            stops: vec![
                ColorStop::new(0.0, spec.main_color),
                ColorStop::new(1.0, spec.secondary_color),
            ],
        },
    }
}

/// Vertical lightness ramp: lighter at the top, the color itself in the
/// middle, darker at the bottom. The axis runs down the cell's left edge,
/// which for a vertical gradient shades the full width identically.
fn paint_shade(rect: Rect, color: Rgb) -> FillOp {
    FillOp::Gradient {
        rect,
        gradient: Gradient::Linear {
            start: Point::new(rect.x, rect.y),
            end: Point::new(rect.x, rect.y + rect.height),
            stops: vec![
                ColorStop::new(0.0, color.lighten(SHADE_LIGHTEN)),
                ColorStop::new(0.5, color),
                ColorStop::new(1.0, color.darken(SHADE_DARKEN)),
            ],
        },
    }
}
