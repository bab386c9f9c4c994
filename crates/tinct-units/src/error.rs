//! Error types for quantity parsing and unit conversion.
//!
//! Provides unified error handling for the quantity model: lexical scan
//! failures and conversions with no factor-table entry.

use thiserror::Error;

/// Result type alias using [`UnitError`] as the error type.
pub type UnitResult<T> = std::result::Result<T, UnitError>;

/// Errors raised by quantity parsing and unit conversion.
///
/// A conversion through a missing factor-table entry is an explicit
/// error, never a silent zero: callers of `value_in` must check for
/// [`UnsupportedConversion`](UnitError::UnsupportedConversion) rather
/// than assume success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// An angle token carries an unrecognized unit suffix.
    #[error("invalid angle unit of measurement {input:?}")]
    InvalidUnit {
        /// The offending component text.
        input: String,
    },

    /// A component token has no leading numeric literal.
    #[error("invalid quantity {input:?}")]
    InvalidQuantity {
        /// The offending component text.
        input: String,
    },

    /// No conversion factor exists between the two units.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// Source unit symbol.
        from: &'static str,
        /// Target unit symbol.
        to: &'static str,
    },
}

impl UnitError {
    /// Creates an [`UnitError::InvalidUnit`] error.
    #[inline]
    pub fn invalid_unit(input: impl Into<String>) -> Self {
        Self::InvalidUnit {
            input: input.into(),
        }
    }

    /// Creates an [`UnitError::InvalidQuantity`] error.
    #[inline]
    pub fn invalid_quantity(input: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            input: input.into(),
        }
    }

    /// Creates an [`UnitError::UnsupportedConversion`] error.
    #[inline]
    pub fn unsupported_conversion(from: &'static str, to: &'static str) -> Self {
        Self::UnsupportedConversion { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = UnitError::invalid_unit("90purple");
        assert!(err.to_string().contains("90purple"));

        let err = UnitError::unsupported_conversion("deg", "%");
        assert!(err.to_string().contains("deg -> %"));
    }
}
