//! Signed opponent-channel intensities (Lab a*/b*).
//!
//! Unlike [`Intensity`](crate::Intensity) these are signed and have a
//! single unit-less representation clamped to [-128, 127].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{UnitError, UnitResult};

static LINEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d+(?:\.\d*)?)$").unwrap());

/// A signed opponent-channel value.
///
/// Has exactly one unit, so there is no cross-unit conversion table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearIntensity {
    value: f64,
}

impl LinearIntensity {
    /// Creates a value clamped to [-128, 127].
    #[inline]
    pub fn new(value: f64) -> Self {
        Self {
            value: Self::sanitize(value),
        }
    }

    /// Parses a signed integer token like `-86`.
    ///
    /// The numeric literal is truncated to an integer before
    /// sanitizing.
    pub fn parse(text: &str) -> UnitResult<Self> {
        let caps = LINEAR_TOKEN
            .captures(text.trim())
            .ok_or_else(|| UnitError::invalid_quantity(text))?;
        let value: f64 = caps[1].parse().map_err(|_| UnitError::invalid_quantity(text))?;
        Ok(Self::new(value.trunc()))
    }

    /// Clamps `value` to [-128, 127] and rounds to an integer.
    #[inline]
    pub fn sanitize(value: f64) -> f64 {
        value.clamp(-128.0, 127.0).round()
    }

    /// The sanitized value.
    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }
}
