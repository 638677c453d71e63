//! Integration tests for hex parsing, formatting, and channel arithmetic.

use chromagrid_color::{ColorError, Rgb};

#[test]
fn test_parse_with_prefix() {
    assert_eq!(Rgb::from_hex("#ff8000"), Ok(Rgb::new(255, 128, 0)));
}

#[test]
fn test_parse_without_prefix() {
    assert_eq!(Rgb::from_hex("336699"), Ok(Rgb::new(0x33, 0x66, 0x99)));
}

#[test]
fn test_parse_accepts_uppercase_digits() {
    assert_eq!(Rgb::from_hex("#AABBCC"), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
}

#[test]
fn test_parse_rejects_shorthand() {
    // Three-digit shorthand is a picker can't-happen; it must fail loudly.
    assert_eq!(
        Rgb::from_hex("#fff"),
        Err(ColorError::InvalidColorFormat("#fff".to_string()))
    );
}

#[test]
fn test_parse_rejects_wrong_lengths() {
    assert!(Rgb::from_hex("").is_err());
    assert!(Rgb::from_hex("#").is_err());
    assert!(Rgb::from_hex("#12345").is_err());
    assert!(Rgb::from_hex("#1234567").is_err());
    assert!(Rgb::from_hex("#aabbccdd").is_err());
}

#[test]
fn test_parse_rejects_non_hex_digits() {
    assert!(Rgb::from_hex("#gg0000").is_err());
    assert!(Rgb::from_hex("#12 456").is_err());
    assert!(Rgb::from_hex("#ffaaé").is_err());
}

#[test]
fn test_format_is_lowercase_and_padded() {
    assert_eq!(Rgb::new(0xab, 0x00, 0x0f).to_hex_string(), "#ab000f");
    assert_eq!(Rgb::BLACK.to_hex_string(), "#000000");
}

#[test]
fn test_round_trip_parse_format() {
    // Sample the channel space rather than iterating all 16.7M triples.
    for r in (0..=255u8).step_by(17) {
        for g in (0..=255u8).step_by(51) {
            for b in (0..=255u8).step_by(85) {
                let color = Rgb::new(r, g, b);
                assert_eq!(Rgb::from_hex(&color.to_hex_string()), Ok(color));
            }
        }
    }
}

#[test]
fn test_lighten_mid_gray() {
    // 128 + (255 - 128) * 0.4 = 178.8, rounds to 179 (0xb3).
    assert_eq!(
        Rgb::new(128, 128, 128).lighten(0.4),
        Rgb::new(0xb3, 0xb3, 0xb3)
    );
}

#[test]
fn test_darken_mid_gray() {
    // 128 * 0.6 = 76.8, rounds to 77 (0x4d).
    assert_eq!(
        Rgb::new(128, 128, 128).darken(0.6),
        Rgb::new(0x4d, 0x4d, 0x4d)
    );
}

#[test]
fn test_lighten_white_is_fixed_point() {
    assert_eq!(Rgb::WHITE.lighten(0.4), Rgb::WHITE);
}

#[test]
fn test_darken_black_is_fixed_point() {
    assert_eq!(Rgb::BLACK.darken(0.6), Rgb::BLACK);
}

#[test]
fn test_lighten_factor_bounds() {
    let color = Rgb::new(10, 200, 99);
    assert_eq!(color.lighten(0.0), color);
    assert_eq!(color.lighten(1.0), Rgb::WHITE);
}

#[test]
fn test_darken_factor_bounds() {
    let color = Rgb::new(10, 200, 99);
    assert_eq!(color.darken(1.0), color);
    assert_eq!(color.darken(0.0), Rgb::BLACK);
}

#[test]
fn test_serialize_as_hex_string() {
    let json = serde_json::to_string(&Rgb::new(255, 0, 170)).unwrap();
    assert_eq!(json, "\"#ff00aa\"");
}

#[test]
fn test_deserialize_from_hex_string() {
    let color: Rgb = serde_json::from_str("\"#00ff7f\"").unwrap();
    assert_eq!(color, Rgb::new(0, 255, 127));
}

#[test]
fn test_deserialize_rejects_malformed_string() {
    assert!(serde_json::from_str::<Rgb>("\"not-a-color\"").is_err());
    assert!(serde_json::from_str::<Rgb>("42").is_err());
}
