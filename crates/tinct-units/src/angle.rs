//! Hue angles in degrees, gradians, radians or turns.
//!
//! Out-of-range angles wrap around the unit's period rather than clamp:
//! `-10deg` is the same direction as `350deg`. Degrees and gradians
//! round to integers, radians and turns to two decimals.
//!
//! # Reference
//!
//! CSS Values and Units Module Level 4, §6.1 (angle units)

use std::f64::consts::{PI, TAU};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{UnitError, UnitResult};

static ANGLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d*\.\d+|\d+(?:\.\d*)?)([a-zA-Z]*)%?$").unwrap());

/// Angle units and their periods.
///
/// | Unit | Period |
/// |------|--------|
/// | `deg` | 360 |
/// | `grad` | 400 |
/// | `rad` | 2π |
/// | `turn` | 2π |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    /// Degrees, [0, 360).
    #[default]
    Deg,
    /// Gradians, [0, 400).
    Grad,
    /// Radians, [0, 2π).
    Rad,
    /// Turns, [0, 2π).
    Turn,
}

impl AngleUnit {
    /// All angle units, in declaration order.
    pub const ALL: [AngleUnit; 4] = [Self::Deg, Self::Grad, Self::Rad, Self::Turn];

    /// The unit's CSS symbol.
    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Deg => "deg",
            Self::Grad => "grad",
            Self::Rad => "rad",
            Self::Turn => "turn",
        }
    }

    /// Upper bound of the unit's legal range (exclusive).
    #[inline]
    pub fn max(self) -> f64 {
        match self {
            Self::Deg => 360.0,
            Self::Grad => 400.0,
            Self::Rad | Self::Turn => TAU,
        }
    }

    /// Looks a unit up by its CSS symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "deg" => Some(Self::Deg),
            "grad" => Some(Self::Grad),
            "rad" => Some(Self::Rad),
            "turn" => Some(Self::Turn),
            _ => None,
        }
    }

    /// Static conversion factor from `self` to `target`.
    ///
    /// `None` means no table entry exists; callers surface that as
    /// [`UnitError::UnsupportedConversion`].
    pub fn factor(self, target: AngleUnit) -> Option<f64> {
        Some(match (self, target) {
            (a, b) if a == b => 1.0,
            (Self::Deg, Self::Grad) => 1.0 / 0.9,
            (Self::Deg, Self::Rad) => PI / 180.0,
            (Self::Deg, Self::Turn) => 1.0 / 360.0,
            (Self::Grad, Self::Deg) => 0.9,
            (Self::Grad, Self::Rad) => PI / 200.0,
            (Self::Grad, Self::Turn) => 1.0 / 400.0,
            (Self::Rad, Self::Deg) => 180.0 / PI,
            (Self::Rad, Self::Grad) => 200.0 / PI,
            (Self::Rad, Self::Turn) => 0.5 / PI,
            (Self::Turn, Self::Deg) => 360.0,
            (Self::Turn, Self::Grad) => 400.0,
            (Self::Turn, Self::Rad) => TAU,
            _ => unreachable!(),
        })
    }
}

/// A hue angle bound to one of the four CSS angle units.
///
/// The stored value is always within the unit's legal range; sanitizing
/// happens in the constructor and on every unit conversion, never
/// deferred.
///
/// # Example
///
/// ```rust
/// use tinct_units::{Angle, AngleUnit};
///
/// let a = Angle::parse("0.8turn").unwrap();
/// assert_eq!(a.value_in(AngleUnit::Deg).unwrap(), 288.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Angle {
    value: f64,
    unit: AngleUnit,
}

impl Angle {
    /// Creates an angle, wrapping `value` into the unit's legal range.
    #[inline]
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Self {
            value: Self::sanitize(value, unit),
            unit,
        }
    }

    /// Parses an angle from a component token like `288`, `0.8turn` or
    /// `3.141592rad`.
    ///
    /// A bare number defaults to degrees. An unknown unit suffix fails
    /// with [`UnitError::InvalidUnit`]; a trailing `%` is ignored, as
    /// the reference notation scanner never treats it as an angle unit.
    pub fn parse(text: &str) -> UnitResult<Self> {
        let caps = ANGLE_TOKEN
            .captures(text.trim())
            .ok_or_else(|| UnitError::invalid_quantity(text))?;
        let value: f64 = caps[1].parse().map_err(|_| UnitError::invalid_quantity(text))?;
        let unit = match caps.get(2).map_or("", |m| m.as_str()) {
            "" => AngleUnit::Deg,
            symbol => AngleUnit::from_symbol(symbol).ok_or_else(|| UnitError::invalid_unit(text))?,
        };
        Ok(Self::new(value, unit))
    }

    /// Wraps `value` into `unit`'s legal range and applies the unit's
    /// rounding policy (integer degrees/gradians, two-decimal
    /// radians/turns).
    ///
    /// Negative values wrap forward by whole periods:
    ///
    /// ```rust
    /// use tinct_units::{Angle, AngleUnit};
    ///
    /// assert_eq!(Angle::sanitize(-10.0, AngleUnit::Deg), 350.0);
    /// assert_eq!(Angle::sanitize(730.0, AngleUnit::Deg), 10.0);
    /// ```
    pub fn sanitize(value: f64, unit: AngleUnit) -> f64 {
        let max = unit.max();
        let mut v = value;
        if v < 0.0 {
            let periods = (v.abs() / max).ceil();
            v += periods * max;
        }
        v %= max;
        v = match unit {
            AngleUnit::Deg | AngleUnit::Grad => v.round(),
            AngleUnit::Rad | AngleUnit::Turn => (v * 100.0).round() / 100.0,
        };
        // rounding can land exactly on the exclusive upper bound
        if v >= max {
            v -= max;
        }
        v
    }

    /// Converts into another angle unit, re-sanitizing in the target.
    #[inline]
    pub fn to(self, unit: AngleUnit) -> UnitResult<Self> {
        Ok(Self::new(self.value_in(unit)?, unit))
    }

    /// The angle's value expressed in `unit`.
    pub fn value_in(self, unit: AngleUnit) -> UnitResult<f64> {
        let factor = self
            .unit
            .factor(unit)
            .ok_or(UnitError::unsupported_conversion(
                self.unit.symbol(),
                unit.symbol(),
            ))?;
        Ok(Self::sanitize(factor * self.value, unit))
    }

    /// The sanitized value in the angle's own unit.
    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    /// The angle's unit.
    #[inline]
    pub fn unit(self) -> AngleUnit {
        self.unit
    }
}
