//! Linear sRGB: sRGB primaries without the transfer function.
//! Base colorspace: XYZ D65.
//!
//! # Range
//!
//! - [0, 1] per channel in gamut; out-of-gamut intermediates may leave
//!   the range and are clamped only at the color-value boundary
//!
//! # Reference
//!
//! CSS Color Module Level 4, sample code for color conversions

use crate::coords::{transform, Coords, TransformMatrix};

/// XYZ D65 -> linear sRGB.
pub const LINEAR_FROM_XYZ: TransformMatrix = [
    [3.2409699419045226, -1.537383177570094, -0.4986107602930034],
    [-0.9692436362808796, 1.8759675015077202, 0.04155505740717559],
    [0.05563007969699366, -0.20397695888897652, 1.0569715142428786],
];

/// Linear sRGB -> XYZ D65.
pub const LINEAR_TO_XYZ: TransformMatrix = [
    [0.41239079926595934, 0.357584339383878, 0.1804807884018343],
    [0.21263900587151027, 0.715168678767756, 0.07219231536073371],
    [0.01933081871559182, 0.11919477979462598, 0.9505321522496607],
];

/// XYZ D65 -> linear sRGB.
#[inline]
pub fn from_base(coords: Coords) -> Coords {
    transform(&LINEAR_FROM_XYZ, coords)
}

/// Linear sRGB -> XYZ D65.
#[inline]
pub fn to_base(coords: Coords) -> Coords {
    transform(&LINEAR_TO_XYZ, coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white() {
        // Linear white maps to the D65 white point
        let xyz = to_base([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(xyz[0], 0.3127 / 0.3290, epsilon = 1e-6);
        assert_abs_diff_eq!(xyz[1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        let rgb = [0.25, 0.5, 0.75];
        let back = from_base(to_base(rgb));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-12);
        }
    }
}
