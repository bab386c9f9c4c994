//! sRGB: gamma-encoded RGB. Base colorspace: linear sRGB.
//!
//! The sRGB standard uses a piecewise function combining a linear
//! segment near black with a power curve (approximately gamma 2.2) for
//! the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1] per channel
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use crate::coords::Coords;

/// sRGB EOTF: decodes a gamma-encoded channel to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// sRGB OETF: encodes linear light to a gamma-encoded channel.
///
/// Sign-preserving so slightly negative out-of-gamut intermediates
/// survive until the final clamp.
///
/// # Formula
///
/// ```text
/// if |L| <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = sign(L) * (1.055 * |L|^(1/2.4) - 0.055)
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    let a = l.abs();
    if a > 0.0031308 {
        l.signum() * (1.055 * a.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * l
    }
}

/// Linear sRGB -> sRGB (gamma encode).
#[inline]
pub fn from_base(coords: Coords) -> Coords {
    [oetf(coords[0]), oetf(coords[1]), oetf(coords[2])]
}

/// sRGB -> linear sRGB (gamma decode).
#[inline]
pub fn to_base(coords: Coords) -> Coords {
    [eotf(coords[0]), eotf(coords[1]), eotf(coords[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            assert_abs_diff_eq!(oetf(eotf(v)), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_midpoint() {
        // sRGB 0.5 is approximately 0.214 linear
        assert_abs_diff_eq!(eotf(0.5), 0.214, epsilon = 0.01);
    }

    #[test]
    fn test_negative_preserves_sign() {
        assert!(oetf(-0.5) < 0.0);
        assert_eq!(oetf(-0.001), 12.92 * -0.001);
    }
}
