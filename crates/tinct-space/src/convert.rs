//! Recursive conversion over the colorspace tree.
//!
//! Any two colorspaces are connected through the root, so a conversion
//! is an ascent to absolute (root) coordinates followed by a descent
//! into the target:
//!
//! ```text
//! source --to_base*--> xyz-d65 --from_base*--> target
//! ```
//!
//! # Example
//!
//! ```rust
//! use tinct_space::{to_space, Space};
//!
//! // sRGB mid gray to linear light
//! let linear = to_space(Space::Srgb, Space::SrgbLinear, [0.5, 0.5, 0.5]);
//! assert!((linear[0] - 0.2140).abs() < 1e-4);
//! ```

use crate::coords::Coords;
use crate::space::Space;

/// Ascends from `space` to absolute (root) coordinates.
pub fn to_absolute(space: Space, coords: Coords) -> Coords {
    match space.base() {
        None => coords,
        Some(base) => to_absolute(base, space.to_base(coords)),
    }
}

/// Descends from absolute (root) coordinates into `space`.
pub fn from_absolute(space: Space, coords: Coords) -> Coords {
    match space.base() {
        None => coords,
        Some(base) => space.from_base(from_absolute(base, coords)),
    }
}

/// Converts coordinates from `source` to `target`.
#[inline]
pub fn to_space(source: Space, target: Space, coords: Coords) -> Coords {
    from_absolute(target, to_absolute(source, coords))
}
