//! Coordinate triples and the 3x3 transforms between them.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column
//! vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! Engine coordinates are normalized: RGB channels and
//! saturation/lightness/whiteness/blackness in 0-1, hue as a fraction
//! of a turn, Lab in its natural scale, XYZ unbounded. A NaN in a hue
//! slot means "no hue" (achromatic); see [`NO_HUE`].

/// A coordinate triple in some colorspace.
pub type Coords = [f64; 3];

/// A row-major 3x3 transform matrix.
pub type TransformMatrix = [[f64; 3]; 3];

/// In-engine spelling of the "no hue" sentinel.
///
/// An achromatic color has no hue direction; that is a valid
/// colorimetric state, distinct from hue 0. The sentinel becomes an
/// `Option::None` at the color-value boundary and must never be
/// coerced to 0 along the way.
pub const NO_HUE: f64 = f64::NAN;

/// Chroma below this threshold counts as zero.
///
/// A full ascent and descent through the tree leaves float noise on
/// the order of 1e-13 in each channel, so an exact `C == 0` test would
/// miss colors that are gray for every practical purpose.
pub const ACHROMATIC_EPS: f64 = 1e-7;

/// Applies a 3x3 matrix to a coordinate triple.
#[inline]
pub fn transform(matrix: &TransformMatrix, coords: Coords) -> Coords {
    let [x, y, z] = coords;
    [
        matrix[0][0] * x + matrix[0][1] * y + matrix[0][2] * z,
        matrix[1][0] * x + matrix[1][1] * y + matrix[1][2] * z,
        matrix[2][0] * x + matrix[2][1] * y + matrix[2][2] * z,
    ]
}
