//! sRGB color values and channel arithmetic for the grid renderer.
//!
//! # Scope
//!
//! This crate provides:
//! - **Hex notation** - strict six-digit `#rrggbb` parsing and formatting
//! - **Lightness ramps** - the lighten/darken arithmetic behind shade fills
//! - **Serialization** - colors travel through documents as hex strings
//!
//! Colors are opaque. The renderer has no alpha or blending model, so the
//! value type carries exactly three channels.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error produced when a hex color string cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not six hex digits, optionally prefixed with `#`.
    #[error("invalid color format: {0:?} (expected #rrggbb)")]
    InvalidColorFormat(String),
}

/// Opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black (#000000).
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// White (#ffffff).
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex color, optionally prefixed with `#`.
    ///
    /// Shorthand notations are rejected: color pickers always emit the long
    /// form, so anything else indicates corrupt input rather than a format
    /// worth repairing.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if the digit count is not
    /// exactly six after stripping the prefix, or any digit is outside
    /// `[0-9a-fA-F]`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::InvalidColorFormat(hex.to_string()));
        }
        let channel = |start: usize| {
            u8::from_str_radix(&digits[start..start + 2], 16)
                .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Format as `#rrggbb` with lowercase, zero-padded channels.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Blend each channel toward white by `factor` in `[0, 1]`.
    ///
    /// `c' = c + (255 - c) * factor`, rounded to nearest and clamped.
    #[must_use]
    pub fn lighten(self, factor: f32) -> Self {
        self.map_channels(|c| f32::from(c) + (255.0 - f32::from(c)) * factor)
    }

    /// Scale each channel by `factor` in `[0, 1]`.
    ///
    /// The factor is a retention ratio: 0.6 keeps 60% of the original
    /// brightness, it does not remove 60%.
    #[must_use]
    pub fn darken(self, factor: f32) -> Self {
        self.map_channels(|c| f32::from(c) * factor)
    }

    /// Apply `f` to each channel, round to nearest, clamp to `[0, 255]`.
    fn map_channels(self, f: impl Fn(u8) -> f32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn quantize(value: f32) -> u8 {
            value.round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: quantize(f(self.r)),
            g: quantize(f(self.g)),
            b: quantize(f(self.b)),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Rgb;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a #rrggbb color string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Rgb, E>
            where
                E: de::Error,
            {
                Rgb::from_hex(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
