//! XYZ with a D50 white point. Base colorspace: XYZ D65.
//!
//! The two XYZ flavors are related by a Bradford chromatic adaptation,
//! pre-baked into a single matrix pair.
//!
//! # Reference
//!
//! CSS Color Module Level 4, sample code for color conversions

use crate::coords::{transform, Coords, TransformMatrix};

/// XYZ D65 -> XYZ D50 (Bradford adaptation).
pub const D50_FROM_D65: TransformMatrix = [
    [1.0479298208405488, 0.022946793341019088, -0.05019222954313557],
    [0.029627815688159344, 0.990434484573249, -0.01707382502938514],
    [-0.009243058152591178, 0.015055144896577895, 0.7518742899580008],
];

/// XYZ D50 -> XYZ D65 (inverse Bradford adaptation).
pub const D50_TO_D65: TransformMatrix = [
    [0.9554734527042182, -0.023098536874261423, 0.0632593086610217],
    [-0.028369706963208136, 1.0099954580058226, 0.021041398966943008],
    [0.012314001688319899, -0.020507696433477912, 1.3303659366080753],
];

/// XYZ D65 -> XYZ D50.
#[inline]
pub fn from_base(coords: Coords) -> Coords {
    transform(&D50_FROM_D65, coords)
}

/// XYZ D50 -> XYZ D65.
#[inline]
pub fn to_base(coords: Coords) -> Coords {
    transform(&D50_TO_D65, coords)
}
