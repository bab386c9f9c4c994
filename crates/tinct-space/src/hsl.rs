//! HSL: hue / saturation / lightness. Base colorspace: sRGB.
//!
//! A cylindrical re-parameterization of the sRGB cube. Engine
//! coordinates keep hue as a fraction of a turn and
//! saturation/lightness in [0, 1].
//!
//! Achromatic colors come out of [`from_base`] with `h = 0` and
//! `s = 0`; the "no hue" sentinel belongs to HWB, one level further up
//! the tree.
//!
//! # Reference
//!
//! CSS Color Module Level 4, HSL color

use crate::coords::{Coords, ACHROMATIC_EPS};

/// sRGB -> HSL.
pub fn from_base(coords: Coords) -> Coords {
    let [r, g, b] = coords;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let mut chroma = max - min;

    let hue_prime = if chroma < ACHROMATIC_EPS {
        chroma = 0.0;
        0.0
    } else if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let l = (max + min) / 2.0;
    let s = if chroma == 0.0 {
        0.0
    } else {
        chroma / (1.0 - (2.0 * l - 1.0).abs())
    };
    [hue_prime / 6.0, s, l]
}

/// Piecewise hue reconstruction for one RGB channel.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL -> sRGB.
pub fn to_base(coords: Coords) -> Coords {
    let [h, s, l] = coords;
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        let red = from_base([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(red[0], 0.0);
        assert_abs_diff_eq!(red[1], 1.0);
        assert_abs_diff_eq!(red[2], 0.5);

        let green = from_base([0.0, 1.0, 0.0]);
        assert_abs_diff_eq!(green[0], 1.0 / 3.0, epsilon = 1e-12);

        let blue = from_base([0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(blue[0], 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_achromatic_has_zero_hue() {
        let gray = from_base([0.5, 0.5, 0.5]);
        assert_eq!(gray[0], 0.0);
        assert_eq!(gray[1], 0.0);
        assert_abs_diff_eq!(gray[2], 0.5);
    }

    #[test]
    fn test_near_gray_counts_as_achromatic() {
        // Float noise from a tree descent must not invent a hue
        let c = from_base([0.5, 0.5 + 1e-9, 0.5]);
        assert_eq!(c[0], 0.0);
        assert_eq!(c[1], 0.0);
    }

    #[test]
    fn test_roundtrip() {
        let rgb = [0.436, 0.321, 0.765];
        let back = to_base(from_base(rgb));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_hue_delta_wraps() {
        // red with max == r and g < b exercises the rem_euclid branch
        let c = from_base([1.0, 0.0, 0.5]);
        assert!(c[0] > 0.9 && c[0] < 1.0, "hue {}", c[0]);
    }
}
