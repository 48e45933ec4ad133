//! Tests for the color value types and their conversions.

use chroma::{Channels, Color, ColorError, Hex, Hsl, Rgb};

// ============================================================================
// Construction & validation
// ============================================================================

#[test]
fn rgb_channels_and_render() {
    let mut rgb = Rgb::new(240, 240, 240, Some(1.0)).unwrap();
    rgb.set_channel("r", 255.0).unwrap();
    rgb.set_channel("g", 255.0).unwrap();
    rgb.set_channel("b", 255.0).unwrap();
    rgb.set_channel("a", 0.5).unwrap();

    assert!(rgb.has_channel("r"));
    assert_eq!(rgb.channel("r").unwrap(), 255.0);
    assert_eq!(rgb.channel("a").unwrap(), 0.5);
    assert_eq!(rgb.to_string(), "rgba(255, 255, 255, 0.5)");
    assert!(rgb.has_alpha());
}

#[test]
fn rgb_out_of_range() {
    assert!(matches!(
        Rgb::new(300, 255, 255, Some(0.5)),
        Err(ColorError::RangeInvalid { channel: 'r', .. })
    ));
    assert!(matches!(
        Rgb::new(255, 300, 255, Some(0.5)),
        Err(ColorError::RangeInvalid { channel: 'g', .. })
    ));
    assert!(matches!(
        Rgb::new(255, 255, -1, Some(0.5)),
        Err(ColorError::RangeInvalid { channel: 'b', .. })
    ));
    assert!(matches!(
        Rgb::new(255, 255, 255, Some(20.0)),
        Err(ColorError::RangeInvalid { channel: 'a', .. })
    ));
}

#[test]
fn failed_setter_leaves_value_untouched() {
    let mut rgb = Rgb::new(10, 20, 30, None).unwrap();
    assert!(rgb.set_g(256).is_err());
    assert_eq!(rgb.g(), 20);
}

#[test]
fn hsl_channels_and_render() {
    let mut hsl = Hsl::new(260, 100, 100, Some(1.0)).unwrap();
    hsl.set_h(240).unwrap();
    hsl.set_s(60).unwrap();
    hsl.set_l(40).unwrap();
    hsl.set_a(0.5).unwrap();

    assert_eq!(hsl.channel("h").unwrap(), 240.0);
    assert_eq!(hsl.channel("s").unwrap(), 60.0);
    assert_eq!(hsl.channel("l").unwrap(), 40.0);
    assert_eq!(hsl.to_string(), "hsla(240, 60%, 40%, 0.5)");
}

#[test]
fn hsl_out_of_range() {
    assert!(Hsl::new(460, 100, 100, Some(1.0)).is_err());
    assert!(Hsl::new(260, 150, 100, Some(1.0)).is_err());
    assert!(Hsl::new(260, 100, 150, Some(1.0)).is_err());
    assert!(Hsl::new(260, 100, 100, Some(2.0)).is_err());
}

#[test]
fn hex_channels_and_render() {
    let mut hex = Hex::new("#fff").unwrap();
    hex.set_channel("r", "f0".to_string()).unwrap();
    hex.set_channel("g", "b4".to_string()).unwrap();
    hex.set_channel("b", "3c".to_string()).unwrap();
    hex.set_channel("hex", "#F0B43C".to_string()).unwrap();

    assert_eq!(hex.channel("hex").unwrap(), "f0b43c");
    assert_eq!(hex.r(), "f0");
    assert_eq!(hex.g(), "b4");
    assert_eq!(hex.b(), "3c");
    assert_eq!(hex.to_string(), "#f0b43c");
}

#[test]
fn hex_bad_length_and_digits() {
    assert!(matches!(Hex::new("33"), Err(ColorError::FormatInvalid(_))));
    assert!(matches!(Hex::new("gggggg"), Err(ColorError::FormatInvalid(_))));
    assert!(Hex::is_valid("0a9f"));
    assert!(!Hex::is_valid("0a9g"));
}

// ============================================================================
// Named channel access
// ============================================================================

#[test]
fn unknown_channel() {
    let mut rgb = Rgb::new(1, 2, 3, None).unwrap();
    assert!(matches!(rgb.channel("q"), Err(ColorError::UnknownChannel(_))));
    assert!(matches!(
        rgb.set_channel("q", 255.0),
        Err(ColorError::UnknownChannel(_))
    ));

    let hex = Hex::new("#f0b43c").unwrap();
    assert!(matches!(hex.channel("q"), Err(ColorError::UnknownChannel(_))));
}

#[test]
fn channels_cannot_be_removed() {
    let mut rgb = Rgb::new(255, 255, 255, Some(0.5)).unwrap();
    let mut hsl = Hsl::new(260, 100, 100, Some(1.0)).unwrap();
    let mut hex = Hex::new("#f0b43c").unwrap();

    assert_eq!(
        rgb.remove_channel("r"),
        Err(ColorError::ImmutablePropertyViolation("r".to_string()))
    );
    assert!(matches!(
        hsl.remove_channel("h"),
        Err(ColorError::ImmutablePropertyViolation(_))
    ));
    assert!(matches!(
        hex.remove_channel("hex"),
        Err(ColorError::ImmutablePropertyViolation(_))
    ));
    assert_eq!(rgb.r(), 255);
}

#[test]
fn missing_alpha_reads_as_opaque() {
    let rgb = Rgb::new(1, 2, 3, None).unwrap();
    assert!(!rgb.has_alpha());
    assert_eq!(rgb.a(), None);
    assert_eq!(rgb.channel("a").unwrap(), 1.0);
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn hex_to_hsl() {
    let hsl = Hex::new("#f0b43c").unwrap().to_hsl();
    assert_eq!((hsl.h(), hsl.s(), hsl.l()), (40, 75, 94));
    assert_eq!(hsl.to_string(), "hsl(40, 75%, 94%)");
}

#[test]
fn hex_to_rgb() {
    let rgb = Hex::new("#fff").unwrap().to_rgb();
    assert_eq!((rgb.r(), rgb.g(), rgb.b()), (255, 255, 255));
    assert_eq!(rgb.to_string(), "rgb(255, 255, 255)");
}

#[test]
fn hsl_to_rgb_keeps_alpha() {
    let rgb = Hsl::new(40, 75, 94, Some(0.5)).unwrap().to_rgb();
    assert_eq!((rgb.r(), rgb.g(), rgb.b()), (240, 180, 60));
    assert_eq!(rgb.a(), Some(0.5));
    assert_eq!(rgb.to_string(), "rgba(240, 180, 60, 0.5)");
}

#[test]
fn hsl_to_hex() {
    let hex = Hsl::new(40, 75, 94, Some(0.5)).unwrap().to_hex();
    assert_eq!(hex.hex(), "f0b43c");
    assert_eq!((hex.r(), hex.g(), hex.b()), ("f0", "b4", "3c"));
}

#[test]
fn rgb_to_hsl_keeps_alpha() {
    let hsl = Rgb::new(240, 180, 60, Some(0.5)).unwrap().to_hsl();
    assert_eq!((hsl.h(), hsl.s(), hsl.l()), (40, 75, 94));
    assert_eq!(hsl.a(), Some(0.5));
    assert_eq!(hsl.to_string(), "hsla(40, 75%, 94%, 0.5)");
}

#[test]
fn rgb_to_hex() {
    let hex = Rgb::new(240, 180, 60, Some(0.5)).unwrap().to_hex();
    assert_eq!(hex.hex(), "f0b43c");
}

#[test]
fn hex_rgb_hex_restores_six_digits() {
    for input in ["000", "fff", "a1b", "f0b43c", "0a0b0c", "123456", "ffffff"] {
        let hex = Hex::new(input).unwrap();
        let expected: String = if input.len() == 3 {
            input.chars().flat_map(|c| [c, c]).collect()
        } else {
            input.to_string()
        };
        assert_eq!(hex.to_rgb().to_hex().hex(), expected, "round trip of {input}");
    }
}

/// Largest channel drift after `Rgb -> Hsl -> Rgb` with whole-number h, s, l.
const ROUND_TRIP_DRIFT: i32 = 3;

fn drift(r: i32, g: i32, b: i32) -> i32 {
    let rgb = Rgb::new(r, g, b, Some(0.25)).unwrap();
    let back = rgb.to_hsl().to_rgb();
    assert_eq!(back.a(), Some(0.25));
    [(back.r(), r), (back.g(), g), (back.b(), b)]
        .into_iter()
        .map(|(got, want)| (i32::from(got) - want).abs())
        .max()
        .unwrap_or(0)
}

#[test]
fn rgb_hsl_rgb_drift_is_bounded() {
    let mut worst = 0;
    for r in (0..=255).step_by(5) {
        for g in (0..=255).step_by(3) {
            for b in (0..=255).step_by(3) {
                let d = drift(r, g, b);
                assert!(d <= ROUND_TRIP_DRIFT, "{r},{g},{b} drifted by {d}");
                worst = worst.max(d);
            }
        }
    }
    assert_eq!(worst, ROUND_TRIP_DRIFT);
    assert_eq!(drift(0, 129, 246), ROUND_TRIP_DRIFT);
}

#[test]
fn rgb_hsl_rgb_grays_and_primaries_are_close() {
    for v in 0..=255 {
        assert!(drift(v, v, v) <= 1, "gray {v}");
    }
    let primaries = [
        (255, 0, 0),
        (0, 255, 0),
        (0, 0, 255),
        (255, 255, 0),
        (0, 255, 255),
        (255, 0, 255),
    ];
    for (r, g, b) in primaries {
        assert_eq!(drift(r, g, b), 0, "{r},{g},{b}");
    }
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn create_through_color() {
    assert!(Color::rgb(255, 255, 255, Some(0.5)).is_ok());
    assert!(Color::hsl(240, 100, 100, Some(0.5)).is_ok());
    assert!(Color::hex("#fff").is_ok());
}

#[test]
fn parse_rgba() {
    let Color::Rgb(rgb) = Color::parse("rgba(255, 255, 255, 0.5)").unwrap() else {
        panic!("expected an rgb color");
    };
    assert_eq!((rgb.r(), rgb.g(), rgb.b()), (255, 255, 255));
    assert_eq!(rgb.a(), Some(0.5));
}

#[test]
fn parse_hsla_with_percent() {
    let Color::Hsl(hsl) = Color::parse("hsla(240, 100%, 100%, 0.5)").unwrap() else {
        panic!("expected an hsl color");
    };
    assert_eq!((hsl.h(), hsl.s(), hsl.l()), (240, 100, 100));
    assert_eq!(hsl.a(), Some(0.5));
}

#[test]
fn parse_hex() {
    assert_eq!(
        Color::parse("#FFF").unwrap(),
        Color::Hex(Hex::new("fff").unwrap())
    );
}

#[test]
fn parse_errors() {
    assert!(matches!(
        Color::parse("bad color"),
        Err(ColorError::FormatInvalid(_))
    ));
    assert!(matches!(
        Color::parse("rgba(255, 255, 255, 0.5"),
        Err(ColorError::FormatInvalid(_))
    ));
    assert!(matches!(
        Color::parse("rgb 255, 255, 255)"),
        Err(ColorError::FormatInvalid(_))
    ));
    assert!(matches!(
        Color::parse("rgb(red, 0, 0)"),
        Err(ColorError::FormatInvalid(_))
    ));
}

#[test]
fn parse_via_from_str() {
    let color: Color = "hsl(40, 75%, 94%)".parse().unwrap();
    assert_eq!(color.to_hex().to_string(), "#f0b43c");
    assert_eq!(color.to_rgb().to_string(), "rgb(240, 180, 60)");
}
