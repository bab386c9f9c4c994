//! # tinct-units
//!
//! Unit-aware quantity model for CSS color components.
//!
//! Every color channel is measured by one of four quantity kinds, each
//! with its own legal range, clamp-or-wrap policy and rounding:
//!
//! - [`Angle`] - hue angles in `deg`/`grad`/`rad`/`turn`; wraps
//! - [`Intensity`] - RGB channels, bare 0-255 or percent 0-100; clamps
//! - [`LinearIntensity`] - signed Lab opponent channels, [-128, 127]
//! - [`Fraction`] - saturation/lightness/whiteness/blackness, bare 0-1
//!   or percent 0-100; clamps
//!
//! A quantity's value is always within its unit's legal range:
//! sanitizing is applied on construction and on every unit conversion,
//! never deferred.
//!
//! # Usage
//!
//! ```rust
//! use tinct_units::{Angle, AngleUnit, Fraction, FractionUnit};
//!
//! let hue = Angle::parse("0.8turn").unwrap();
//! assert_eq!(hue.value_in(AngleUnit::Deg).unwrap(), 288.0);
//!
//! let sat = Fraction::parse("42%").unwrap();
//! assert_eq!(sat.value_in(FractionUnit::Bare).unwrap(), 0.42);
//! ```
//!
//! # Dependencies
//!
//! - [`regex`] - Component token scanning
//! - [`thiserror`] - Error derive
//!
//! # Used By
//!
//! - `tinct-space` - Channel descriptors reference [`Kind`]
//! - `tinct` - Component parsing and sanitization

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod error;
mod fraction;
mod intensity;
mod linear;

pub use angle::{Angle, AngleUnit};
pub use error::{UnitError, UnitResult};
pub use fraction::{Fraction, FractionUnit};
pub use intensity::{Intensity, IntensityUnit};
pub use linear::LinearIntensity;

/// The quantity kind that measures a color channel.
///
/// Used by colorspace channel descriptors to select the parse and
/// sanitize policy for each component slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Measured by [`Angle`].
    Angle,
    /// Measured by [`Intensity`].
    Intensity,
    /// Measured by [`LinearIntensity`].
    LinearIntensity,
    /// Measured by [`Fraction`].
    Fraction,
}
