//! CSS-like color notation front end.
//!
//! Two notations are recognized:
//!
//! - Hex: `#RRGGBB`, `#RRGGBBAA`, `#RGB`, `#RGBA`
//! - Functional: `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hwb()` with three
//!   comma- or space-separated arguments
//!
//! The functional scanner takes exactly three components; alpha in
//! functional notation is out of scope and defaults to 1. Component
//! tokens are handed to the quantity kind of the matching channel, so
//! `hsl(0.8turn 95% 42%)` parses the hue as an angle and the rest as
//! fractions.

use std::sync::LazyLock;

use regex::Regex;

use tinct_space::Space;
use tinct_units::{
    Angle, AngleUnit, Fraction, FractionUnit, Intensity, IntensityUnit, Kind, LinearIntensity,
};

use crate::color::Color;
use crate::error::{Error, Result};

static HEX_NOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{4}|[0-9a-fA-F]{3})$").unwrap()
});

static FUNCTIONAL_NOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:rgba?)|(?:hsla?)|(?:hwb))\(([^, ]+)(?:(?: *, *)|(?: +))([^, ]+)(?:(?: *, *)|(?: +))([^, ]+)\)$")
        .unwrap()
});

/// Parses a color from hex or functional notation.
pub fn parse(text: &str) -> Result<Color> {
    let text = text.trim();
    if let Some(caps) = HEX_NOTATION.captures(text) {
        return parse_hex(&caps[1]);
    }
    if let Some(caps) = FUNCTIONAL_NOTATION.captures(text) {
        // the first three letters of the function name select the space
        let space = match &caps[1][..3] {
            "rgb" => Space::Srgb,
            "hsl" => Space::Hsl,
            _ => Space::Hwb,
        };
        let components = [
            parse_component(space, 0, &caps[2])?,
            parse_component(space, 1, &caps[3])?,
            parse_component(space, 2, &caps[4])?,
        ];
        return Ok(Color::new(space, components, 1.0));
    }
    Err(Error::syntax(text))
}

/// Decodes the digit body of a hex notation.
///
/// Short forms duplicate each digit (`#fa3` is `#ffaa33`); an alpha
/// pair scales to [0, 1] and defaults to 1.
fn parse_hex(digits: &str) -> Result<Color> {
    let expand = digits.len() <= 4;
    let nibbles: Vec<f64> = digits
        .chars()
        .map(|c| match c.to_digit(16) {
            Some(d) => Ok(d as f64),
            None => Err(Error::syntax(digits)),
        })
        .collect::<Result<_>>()?;
    let bytes: Vec<f64> = if expand {
        nibbles.iter().map(|&d| d * 17.0).collect()
    } else {
        nibbles.chunks(2).map(|p| p[0] * 16.0 + p[1]).collect()
    };
    let alpha = bytes.get(3).map_or(1.0, |&a| a / 255.0);
    Ok(Color::new(Space::Srgb, [bytes[0], bytes[1], bytes[2]], alpha))
}

/// Parses one component token with the quantity kind of the channel it
/// lands in, yielding the channel's display representation.
fn parse_component(space: Space, slot: usize, token: &str) -> Result<f64> {
    let value = match space.channels()[slot].quantity() {
        Some(Kind::Angle) => Angle::parse(token)?.value_in(AngleUnit::Deg)?,
        Some(Kind::Intensity) => Intensity::parse(token)?.value_in(IntensityUnit::Bare)?,
        Some(Kind::Fraction) => Fraction::parse(token)?.value_in(FractionUnit::Bare)?,
        Some(Kind::LinearIntensity) => LinearIntensity::parse(token)?.value(),
        None => token
            .trim()
            .parse()
            .map_err(|_| Error::syntax(token))?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_long() {
        let c = parse("#ff5267").unwrap();
        assert_eq!(c.space(), Space::Srgb);
        assert_eq!(c.components(), [Some(255.0), Some(82.0), Some(103.0)]);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn test_hex_with_alpha() {
        let c = parse("#44009038").unwrap();
        assert_eq!(c.components(), [Some(68.0), Some(0.0), Some(144.0)]);
        assert!((c.alpha() - 56.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_hex_short() {
        let c = parse("#fa3").unwrap();
        assert_eq!(c.components(), [Some(255.0), Some(170.0), Some(51.0)]);

        let c = parse("#fa38").unwrap();
        assert!((c.alpha() - 136.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_functional_rgb() {
        let c = parse("rgb(200 60 255)").unwrap();
        assert_eq!(c.space(), Space::Srgb);
        assert_eq!(c.components(), [Some(200.0), Some(60.0), Some(255.0)]);

        let c = parse("rgba(200, 60, 255)").unwrap();
        assert_eq!(c.components(), [Some(200.0), Some(60.0), Some(255.0)]);
    }

    #[test]
    fn test_functional_percent_rgb() {
        let c = parse("rgb(50% 0% 100%)").unwrap();
        assert_eq!(c.components(), [Some(128.0), Some(0.0), Some(255.0)]);
    }

    #[test]
    fn test_functional_hsl_units() {
        let c = parse("hsl(0.8turn 95% 42%)").unwrap();
        assert_eq!(c.space(), Space::Hsl);
        assert_eq!(c.components(), [Some(288.0), Some(0.95), Some(0.42)]);

        let c = parse("hsl(50 100% 50%)").unwrap();
        assert_eq!(c.components(), [Some(50.0), Some(1.0), Some(0.5)]);
    }

    #[test]
    fn test_functional_hwb() {
        let c = parse("hwb(67 58% 11%)").unwrap();
        assert_eq!(c.space(), Space::Hwb);
        assert_eq!(c.components(), [Some(67.0), Some(0.58), Some(0.11)]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(parse("notacolor"), Err(Error::Syntax { .. })));
        assert!(matches!(parse("#12"), Err(Error::Syntax { .. })));
        assert!(matches!(parse("rgb(1 2)"), Err(Error::Syntax { .. })));
    }

    #[test]
    fn test_bad_unit_surfaces_as_unit_error() {
        assert!(matches!(
            parse("hsl(90purple 50% 50%)"),
            Err(Error::Unit(_))
        ));
    }
}
