//! Per-cell color specifications.
//!
//! A [`ColorSpec`] is the declarative description one editor row boils down
//! to: a fill kind plus every parameter any kind could need. Specs are
//! always fully populated, so serialization and painting branch on `kind`
//! alone and never on field presence.

use chromagrid_color::Rgb;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::Display;

/// How a cell derives its fill from the spec's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SpecKind {
    /// One flat fill of the main color.
    #[default]
    Solid,
    /// Two flat tones split along the spec's orientation.
    BiChromatic,
    /// Two-stop linear gradient along the spec's angle.
    Linear,
    /// Two-stop radial gradient from the cell center.
    Radial,
    /// Vertical lightness ramp derived from the main color.
    Shade,
}

impl<'de> Deserialize<'de> for SpecKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let kind = String::deserialize(deserializer)?;
        // Unrecognized kinds fall back to Solid so documents from newer
        // or foreign writers still load and render something sensible.
        Ok(match kind.as_str() {
            "bi-chromatic" => Self::BiChromatic,
            "linear" => Self::Linear,
            "radial" => Self::Radial,
            "shade" => Self::Shade,
            _ => Self::Solid,
        })
    }
}

/// Split axis for [`SpecKind::BiChromatic`] fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    /// Left and right halves.
    #[default]
    Horizontal,
    /// Top and bottom halves.
    Vertical,
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let orientation = String::deserialize(deserializer)?;
        Ok(match orientation.as_str() {
            "vertical" => Self::Vertical,
            _ => Self::Horizontal,
        })
    }
}

/// Declarative fill specification for one grid cell.
///
/// Every field carries a value regardless of `kind`; fields a kind does
/// not use are simply ignored by the painter. Missing fields deserialize
/// to the same defaults a fresh editor row starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSpec {
    /// Fill variant to paint.
    pub kind: SpecKind,
    /// Primary color, used by every kind.
    pub main_color: Rgb,
    /// Gradient end for linear/radial fills, second tone for two-tone
    /// splits; present but unused for solid and shade fills.
    pub secondary_color: Rgb,
    /// Gradient axis angle in degrees, `[0, 360]`; meaningful for
    /// [`SpecKind::Linear`].
    pub angle_degrees: u16,
    /// Split axis; meaningful for [`SpecKind::BiChromatic`].
    pub orientation: Orientation,
    /// Advisory flag consumed by the randomizer; painting ignores it.
    pub locked: bool,
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self {
            kind: SpecKind::Solid,
            main_color: Rgb::WHITE,
            secondary_color: Rgb::new(0x00, 0xff, 0x00),
            angle_degrees: 90,
            orientation: Orientation::Horizontal,
            locked: false,
        }
    }
}

impl ColorSpec {
    /// A solid fill.
    #[must_use]
    pub fn solid(color: Rgb) -> Self {
        Self {
            kind: SpecKind::Solid,
            main_color: color,
            ..Self::default()
        }
    }

    /// A two-tone split fill.
    #[must_use]
    pub fn bi_chromatic(first: Rgb, second: Rgb, orientation: Orientation) -> Self {
        Self {
            kind: SpecKind::BiChromatic,
            main_color: first,
            secondary_color: second,
            orientation,
            ..Self::default()
        }
    }

    /// A linear gradient fill.
    #[must_use]
    pub fn linear(start: Rgb, end: Rgb, angle_degrees: u16) -> Self {
        Self {
            kind: SpecKind::Linear,
            main_color: start,
            secondary_color: end,
            angle_degrees,
            ..Self::default()
        }
    }

    /// A radial gradient fill.
    #[must_use]
    pub fn radial(center: Rgb, edge: Rgb) -> Self {
        Self {
            kind: SpecKind::Radial,
            main_color: center,
            secondary_color: edge,
            ..Self::default()
        }
    }

    /// A lightness-ramp fill.
    #[must_use]
    pub fn shade(color: Rgb) -> Self {
        Self {
            kind: SpecKind::Shade,
            main_color: color,
            ..Self::default()
        }
    }
}
