//! # tinct
//!
//! CSS color parsing, conversion and manipulation.
//!
//! The [`Color`] value type binds three channel components and an
//! alpha to a colorspace, and converts between spaces through a tree
//! of base relations rooted at XYZ D65. Channel components are
//! unit-aware quantities: a hue is an angle that wraps, an RGB channel
//! clamps to 0-255, a saturation clamps to [0, 1].
//!
//! # Usage
//!
//! ```rust
//! use tinct::{Color, Space};
//!
//! let violet: Color = "#6f52c3".parse()?;
//!
//! let hsl = violet.convert(Space::Hsl);
//! assert_eq!(hsl.hue(), Some(255.0));
//!
//! let lighter = violet.lighten(0.8);
//! let accent = violet.negative();
//! # Ok::<(), tinct::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`tinct_space`] - Colorspace tree and conversion engine
//! - [`tinct_units`] - Unit-aware quantity model
//! - [`regex`] - Notation scanning
//! - [`thiserror`] - Error derive

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;
mod parse;

pub use color::Color;
pub use error::{Error, Result};
pub use parse::parse;

pub use tinct_space::{Channel, Space};
pub use tinct_units::{
    Angle, AngleUnit, Fraction, FractionUnit, Intensity, IntensityUnit, Kind, LinearIntensity,
    UnitError,
};
