//! CIE Lab (1976). Base colorspace: XYZ D65.
//!
//! Lightness `L*` runs 0-100; the opponent axes `a*` (green-red) and
//! `b*` (blue-yellow) are unbounded in theory and clamped to
//! [-128, 127] only at the color-value boundary.
//!
//! Relative to the D65 white point, matching the rest of the tree; no
//! D50 adaptation happens on this edge.
//!
//! # Reference
//!
//! CIE 15:2004, Colorimetry

use crate::coords::Coords;

/// D65 reference white, derived from its chromaticity (x=0.3127,
/// y=0.3290).
pub const WHITE_D65: Coords = [
    0.3127 / 0.3290,
    1.0,
    (1.0 - 0.3127 - 0.3290) / 0.3290,
];

/// Threshold between the cube-root and linear segments, (6/29)^3.
pub const EPSILON: f64 = 216.0 / 24389.0;

/// Cube root of [`EPSILON`], 6/29.
pub const EPSILON_CBRT: f64 = 24.0 / 116.0;

/// Slope of the linear segment, (29/3)^3.
pub const KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn forward(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn inverse(f: f64) -> f64 {
    if f > EPSILON_CBRT {
        f * f * f
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

/// XYZ D65 -> Lab.
pub fn from_base(coords: Coords) -> Coords {
    let f0 = forward(coords[0] / WHITE_D65[0]);
    let f1 = forward(coords[1] / WHITE_D65[1]);
    let f2 = forward(coords[2] / WHITE_D65[2]);
    [
        116.0 * f1 - 16.0,
        500.0 * (f0 - f1),
        200.0 * (f1 - f2),
    ]
}

/// Lab -> XYZ D65.
pub fn to_base(coords: Coords) -> Coords {
    let [l, a, b] = coords;
    let f1 = (l + 16.0) / 116.0;
    let f0 = a / 500.0 + f1;
    let f2 = f1 - b / 200.0;
    // The L branch uses L itself, not f1: below L=8 the lightness
    // curve is linear in Y.
    let y = if l > 8.0 { f1 * f1 * f1 } else { l / KAPPA };
    [
        inverse(f0) * WHITE_D65[0],
        y * WHITE_D65[1],
        inverse(f2) * WHITE_D65[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white() {
        let lab = from_base(WHITE_D65);
        assert_abs_diff_eq!(lab[0], 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lab[1], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lab[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_black() {
        let lab = from_base([0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(lab[0], 0.0, epsilon = 1e-9);
        let xyz = to_base([0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(xyz[1], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_roundtrip() {
        let lab = [53.0, 80.0, 67.0];
        let back = from_base(to_base(lab));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], lab[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_linear_segment() {
        // L=4 is below the L=8 knee, so Y comes from the linear branch
        let xyz = to_base([4.0, 0.0, 0.0]);
        assert_abs_diff_eq!(xyz[1], 4.0 / KAPPA, epsilon = 1e-12);
    }
}
