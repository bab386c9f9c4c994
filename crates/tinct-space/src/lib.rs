//! # tinct-space
//!
//! Colorspace tree and conversion engine.
//!
//! Colorspaces form a tree rooted at XYZ D65; each node knows only its
//! edge to its base space, and any conversion is an ascent to the root
//! followed by a descent into the target. Adding a colorspace means
//! adding one node with two edge functions, never a conversion pair
//! per existing space.
//!
//! Engine coordinates are normalized (RGB and fractions in 0-1, hue as
//! a fraction of a turn, Lab in its natural scale) and unclamped: a
//! conversion may produce out-of-gamut intermediates, and rounding or
//! clamping is the caller's concern. An achromatic hue is carried as
//! NaN ([`NO_HUE`]), never as 0.
//!
//! # Usage
//!
//! ```rust
//! use tinct_space::{to_space, Space};
//!
//! let hsl = to_space(Space::Srgb, Space::Hsl, [1.0, 0.0, 0.0]);
//! assert!((hsl[1] - 1.0).abs() < 1e-9 && (hsl[2] - 0.5).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`tinct_units`] - Channel descriptors carry a quantity kind
//!
//! # Used By
//!
//! - `tinct` - The color value type converts through this engine

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;
mod coords;
mod hsl;
mod hwb;
mod lab;
mod space;
mod srgb;
mod srgb_linear;
mod xyz_d50;

pub use convert::{from_absolute, to_absolute, to_space};
pub use coords::{transform, Coords, TransformMatrix, ACHROMATIC_EPS, NO_HUE};
pub use space::{Channel, Space};
