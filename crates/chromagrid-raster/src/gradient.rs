//! Per-pixel gradient evaluation.
//!
//! Offsets outside `[0, 1]` clamp to the edge stops (pad spread): pixels
//! past either end of a linear axis, or beyond a radial gradient's radius,
//! take the nearest edge color.

use chromagrid_color::Rgb;
use chromagrid_paint::{ColorStop, Gradient};

/// Evaluate `gradient` at the point `(x, y)`.
#[must_use]
pub fn color_at(gradient: &Gradient, x: f32, y: f32) -> Rgb {
    match gradient {
        Gradient::Linear { start, end, stops } => {
            let axis_x = end.x - start.x;
            let axis_y = end.y - start.y;
            let length_sq = axis_x.mul_add(axis_x, axis_y * axis_y);
            // A zero-length axis puts every pixel at the first stop.
            let offset = if length_sq > 0.0 {
                ((x - start.x) * axis_x + (y - start.y) * axis_y) / length_sq
            } else {
                0.0
            };
            sample(stops, offset)
        }
        Gradient::Radial {
            center,
            radius,
            stops,
        } => {
            let distance = (x - center.x).hypot(y - center.y);
            // A zero radius degenerates to the outermost stop everywhere.
            let offset = if *radius > 0.0 {
                distance / radius
            } else {
                1.0
            };
            sample(stops, offset)
        }
    }
}

/// Interpolate the stop list at a clamped offset.
///
/// Stops arrive sorted by ascending offset, as the painter emits them.
fn sample(stops: &[ColorStop], offset: f32) -> Rgb {
    let t = offset.clamp(0.0, 1.0);
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgb::BLACK;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        if t <= pair[1].offset {
            let span = pair[1].offset - pair[0].offset;
            if span <= 0.0 {
                return pair[1].color;
            }
            return lerp(pair[0].color, pair[1].color, (t - pair[0].offset) / span);
        }
    }
    last.color
}

/// Per-channel linear interpolation with round-to-nearest.
fn lerp(from: Rgb, to: Rgb, t: f32) -> Rgb {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn channel(a: u8, b: u8, t: f32) -> u8 {
        f32::from(a)
            .mul_add(1.0 - t, f32::from(b) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    }
    Rgb::new(
        channel(from.r, to.r, t),
        channel(from.g, to.g, t),
        channel(from.b, to.b, t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromagrid_paint::Point;

    fn two_stop_linear() -> Gradient {
        Gradient::Linear {
            start: Point::new(0.0, 0.0),
            end: Point::new(100.0, 0.0),
            stops: vec![
                ColorStop::new(0.0, Rgb::BLACK),
                ColorStop::new(1.0, Rgb::WHITE),
            ],
        }
    }

    #[test]
    fn test_linear_endpoints() {
        let gradient = two_stop_linear();
        assert_eq!(color_at(&gradient, 0.0, 0.0), Rgb::BLACK);
        assert_eq!(color_at(&gradient, 100.0, 0.0), Rgb::WHITE);
    }

    #[test]
    fn test_linear_midpoint_rounds() {
        let gradient = two_stop_linear();
        // 255 * 0.5 = 127.5, rounds to 128.
        assert_eq!(color_at(&gradient, 50.0, 0.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_linear_clamps_past_the_ends() {
        let gradient = two_stop_linear();
        assert_eq!(color_at(&gradient, -40.0, 0.0), Rgb::BLACK);
        assert_eq!(color_at(&gradient, 400.0, 0.0), Rgb::WHITE);
    }

    #[test]
    fn test_linear_offset_ignores_perpendicular_distance() {
        let gradient = two_stop_linear();
        assert_eq!(color_at(&gradient, 0.0, 500.0), Rgb::BLACK);
        assert_eq!(color_at(&gradient, 100.0, -500.0), Rgb::WHITE);
    }

    #[test]
    fn test_radial_center_and_rim() {
        let gradient = Gradient::Radial {
            center: Point::new(50.0, 50.0),
            radius: 25.0,
            stops: vec![
                ColorStop::new(0.0, Rgb::WHITE),
                ColorStop::new(1.0, Rgb::BLACK),
            ],
        };
        assert_eq!(color_at(&gradient, 50.0, 50.0), Rgb::WHITE);
        assert_eq!(color_at(&gradient, 75.0, 50.0), Rgb::BLACK);
        // Beyond the radius clamps to the rim color.
        assert_eq!(color_at(&gradient, 50.0, 0.0), Rgb::BLACK);
    }

    #[test]
    fn test_three_stop_ramp() {
        let mid = Rgb::new(128, 0, 0);
        let gradient = Gradient::Linear {
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 100.0),
            stops: vec![
                ColorStop::new(0.0, Rgb::WHITE),
                ColorStop::new(0.5, mid),
                ColorStop::new(1.0, Rgb::BLACK),
            ],
        };
        assert_eq!(color_at(&gradient, 0.0, 0.0), Rgb::WHITE);
        assert_eq!(color_at(&gradient, 0.0, 50.0), mid);
        assert_eq!(color_at(&gradient, 0.0, 100.0), Rgb::BLACK);
        // Quarter point interpolates within the first segment only:
        // r runs 255 to 128, halfway is 191.5, rounds away from zero to
        // 192; g runs 255 to 0, halfway is 127.5, rounds to 128.
        assert_eq!(color_at(&gradient, 0.0, 25.0), Rgb::new(192, 128, 128));
    }
}
