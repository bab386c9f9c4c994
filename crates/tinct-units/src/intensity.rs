//! Bounded channel intensities (RGB channels).
//!
//! An intensity is either a bare integer 0–255 or a percentage 0–100.
//! Out-of-range values clamp; they never wrap.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{UnitError, UnitResult};

static INTENSITY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d*)?)(%)?$").unwrap());

/// Intensity representations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum IntensityUnit {
    /// Bare integer channel value, 0–255.
    #[default]
    Bare,
    /// Percentage, 0–100.
    Percent,
}

impl IntensityUnit {
    /// The unit's symbol (empty for the bare form).
    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Bare => "",
            Self::Percent => "%",
        }
    }

    /// Static conversion factor from `self` to `target`.
    pub fn factor(self, target: IntensityUnit) -> Option<f64> {
        Some(match (self, target) {
            (a, b) if a == b => 1.0,
            (Self::Bare, Self::Percent) => 100.0 / 255.0,
            (Self::Percent, Self::Bare) => 255.0 / 100.0,
            _ => unreachable!(),
        })
    }
}

/// A display-range channel intensity.
///
/// # Example
///
/// ```rust
/// use tinct_units::{Intensity, IntensityUnit};
///
/// let i = Intensity::parse("50%").unwrap();
/// assert_eq!(i.value_in(IntensityUnit::Bare).unwrap(), 128.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intensity {
    value: f64,
    unit: IntensityUnit,
}

impl Intensity {
    /// Creates an intensity, clamping `value` into the unit's range.
    #[inline]
    pub fn new(value: f64, unit: IntensityUnit) -> Self {
        Self {
            value: Self::sanitize(value, unit),
            unit,
        }
    }

    /// Parses an intensity token like `173` or `76%`.
    ///
    /// The numeric literal is truncated to an integer before
    /// sanitizing, matching the reference scanner.
    pub fn parse(text: &str) -> UnitResult<Self> {
        let caps = INTENSITY_TOKEN
            .captures(text.trim())
            .ok_or_else(|| UnitError::invalid_quantity(text))?;
        let value: f64 = caps[1].parse().map_err(|_| UnitError::invalid_quantity(text))?;
        let unit = if caps.get(2).is_some() {
            IntensityUnit::Percent
        } else {
            IntensityUnit::Bare
        };
        Ok(Self::new(value.trunc(), unit))
    }

    /// Clamps `value` into the unit's range and rounds to an integer.
    #[inline]
    pub fn sanitize(value: f64, unit: IntensityUnit) -> f64 {
        match unit {
            IntensityUnit::Bare => value.clamp(0.0, 255.0).round(),
            IntensityUnit::Percent => value.clamp(0.0, 100.0).round(),
        }
    }

    /// Converts into the other representation, re-sanitizing there.
    #[inline]
    pub fn to(self, unit: IntensityUnit) -> UnitResult<Self> {
        Ok(Self::new(self.value_in(unit)?, unit))
    }

    /// The intensity's value expressed in `unit`.
    ///
    /// The ratio is applied as a multiply before the divide so exact
    /// halves stay exact (`50%` is 127.5, which rounds to 128; the
    /// pre-divided factor would land a hair below the half).
    pub fn value_in(self, unit: IntensityUnit) -> UnitResult<f64> {
        self.unit
            .factor(unit)
            .ok_or(UnitError::unsupported_conversion(
                self.unit.symbol(),
                unit.symbol(),
            ))?;
        Ok(match (self.unit, unit) {
            (IntensityUnit::Percent, IntensityUnit::Bare) => {
                Self::sanitize(self.value * 255.0 / 100.0, unit)
            }
            (IntensityUnit::Bare, IntensityUnit::Percent) => {
                Self::sanitize(self.value * 100.0 / 255.0, unit)
            }
            _ => self.value,
        })
    }

    /// The sanitized value in the intensity's own unit.
    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    /// The intensity's unit.
    #[inline]
    pub fn unit(self) -> IntensityUnit {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_not_wrap() {
        assert_eq!(Intensity::sanitize(-3.0, IntensityUnit::Bare), 0.0);
        assert_eq!(Intensity::sanitize(300.0, IntensityUnit::Bare), 255.0);
        assert_eq!(Intensity::sanitize(150.0, IntensityUnit::Percent), 100.0);
        assert_eq!(Intensity::sanitize(127.5, IntensityUnit::Bare), 128.0);
    }

    #[test]
    fn test_parse() {
        let i = Intensity::parse("173").unwrap();
        assert_eq!((i.value(), i.unit()), (173.0, IntensityUnit::Bare));

        let i = Intensity::parse("76%").unwrap();
        assert_eq!((i.value(), i.unit()), (76.0, IntensityUnit::Percent));

        // fractional literals truncate
        assert_eq!(Intensity::parse("50.9").unwrap().value(), 50.0);

        assert!(matches!(
            Intensity::parse("red"),
            Err(UnitError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_percent_to_bare() {
        let i = Intensity::parse("50%").unwrap();
        assert_eq!(i.value_in(IntensityUnit::Bare).unwrap(), 128.0);

        let i = Intensity::new(255.0, IntensityUnit::Bare);
        assert_eq!(i.value_in(IntensityUnit::Percent).unwrap(), 100.0);
    }
}
