//! Fractional channel values (saturation, lightness, whiteness, ...).
//!
//! A fraction is either a bare real 0–1 rounded to two decimals or an
//! integer percentage 0–100. It shares the percent/bare duality with
//! [`Intensity`](crate::Intensity) but with different bounds and
//! rounding, so the two kinds stay distinct: mixing up their clamp
//! ranges (0–1 vs 0–255) is exactly the hazard separate types prevent.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{UnitError, UnitResult};

static FRACTION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d*\.\d+|\d+(?:\.\d*)?)(%)?$").unwrap());

/// Fraction representations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FractionUnit {
    /// Bare real value, 0–1, two decimals.
    #[default]
    Bare,
    /// Integer percentage, 0–100.
    Percent,
}

impl FractionUnit {
    /// The unit's symbol (empty for the bare form).
    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Bare => "",
            Self::Percent => "%",
        }
    }

    /// Static conversion factor from `self` to `target`.
    pub fn factor(self, target: FractionUnit) -> Option<f64> {
        Some(match (self, target) {
            (a, b) if a == b => 1.0,
            (Self::Bare, Self::Percent) => 100.0,
            (Self::Percent, Self::Bare) => 0.01,
            _ => unreachable!(),
        })
    }
}

/// A bounded fractional quantity.
///
/// # Example
///
/// ```rust
/// use tinct_units::{Fraction, FractionUnit};
///
/// let f = Fraction::parse("42%").unwrap();
/// assert_eq!(f.value_in(FractionUnit::Bare).unwrap(), 0.42);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fraction {
    value: f64,
    unit: FractionUnit,
}

impl Fraction {
    /// Creates a fraction, clamping `value` into the unit's range.
    #[inline]
    pub fn new(value: f64, unit: FractionUnit) -> Self {
        Self {
            value: Self::sanitize(value, unit),
            unit,
        }
    }

    /// Parses a fraction token like `0.95` or `42%`.
    pub fn parse(text: &str) -> UnitResult<Self> {
        let caps = FRACTION_TOKEN
            .captures(text.trim())
            .ok_or_else(|| UnitError::invalid_quantity(text))?;
        let value: f64 = caps[1].parse().map_err(|_| UnitError::invalid_quantity(text))?;
        let unit = if caps.get(2).is_some() {
            FractionUnit::Percent
        } else {
            FractionUnit::Bare
        };
        Ok(Self::new(value, unit))
    }

    /// Clamps `value` into the unit's range and applies the unit's
    /// rounding policy (two decimals bare, integer percent).
    #[inline]
    pub fn sanitize(value: f64, unit: FractionUnit) -> f64 {
        match unit {
            FractionUnit::Bare => (value.clamp(0.0, 1.0) * 100.0).round() / 100.0,
            FractionUnit::Percent => value.clamp(0.0, 100.0).round(),
        }
    }

    /// Converts into the other representation, re-sanitizing there.
    #[inline]
    pub fn to(self, unit: FractionUnit) -> UnitResult<Self> {
        Ok(Self::new(self.value_in(unit)?, unit))
    }

    /// The fraction's value expressed in `unit`.
    ///
    /// Percent to bare divides by 100 directly; the pre-computed 0.01
    /// factor is not exactly representable and `42 * 0.01` misses
    /// 0.42 by one ulp, while `42 / 100` hits it.
    pub fn value_in(self, unit: FractionUnit) -> UnitResult<f64> {
        self.unit
            .factor(unit)
            .ok_or(UnitError::unsupported_conversion(
                self.unit.symbol(),
                unit.symbol(),
            ))?;
        Ok(match (self.unit, unit) {
            (FractionUnit::Percent, FractionUnit::Bare) => self.value / 100.0,
            (FractionUnit::Bare, FractionUnit::Percent) => self.value * 100.0,
            _ => self.value,
        })
    }

    /// The sanitized value in the fraction's own unit.
    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    /// The fraction's unit.
    #[inline]
    pub fn unit(self) -> FractionUnit {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_and_round() {
        assert_eq!(Fraction::sanitize(0.485, FractionUnit::Bare), 0.49);
        assert_eq!(Fraction::sanitize(1.5, FractionUnit::Bare), 1.0);
        assert_eq!(Fraction::sanitize(-0.2, FractionUnit::Bare), 0.0);
        assert_eq!(Fraction::sanitize(34.5, FractionUnit::Percent), 35.0);
        assert_eq!(Fraction::sanitize(120.0, FractionUnit::Percent), 100.0);
    }

    #[test]
    fn test_parse() {
        let f = Fraction::parse("0.95").unwrap();
        assert_eq!((f.value(), f.unit()), (0.95, FractionUnit::Bare));

        let f = Fraction::parse("42%").unwrap();
        assert_eq!((f.value(), f.unit()), (42.0, FractionUnit::Percent));

        assert!(matches!(
            Fraction::parse("%"),
            Err(UnitError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_parse_leading_dot() {
        let f = Fraction::parse(".5").unwrap();
        assert_eq!((f.value(), f.unit()), (0.5, FractionUnit::Bare));

        assert_eq!(Fraction::parse(".955").unwrap().value(), 0.96);

        // a bare dot has no digits at all
        assert!(matches!(
            Fraction::parse("."),
            Err(UnitError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_percent_to_bare() {
        let f = Fraction::parse("42%").unwrap();
        assert_eq!(f.value_in(FractionUnit::Bare).unwrap(), 0.42);

        let f = Fraction::parse("34.5%").unwrap();
        assert_eq!(f.value_in(FractionUnit::Bare).unwrap(), 0.35);

        let f = Fraction::new(0.42, FractionUnit::Bare);
        assert_eq!(f.value_in(FractionUnit::Percent).unwrap(), 42.0);
    }
}
