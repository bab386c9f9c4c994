//! Error types for color parsing and operations.

use thiserror::Error;

use tinct_units::UnitError;

/// Color error.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The text matches no recognized color notation.
    #[error("unrecognized color notation: {input:?}")]
    Syntax {
        /// The rejected input text.
        input: String,
    },

    /// A component token failed quantity parsing or unit conversion.
    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl Error {
    /// Creates a [`Error::Syntax`] from the rejected input.
    pub fn syntax(input: impl Into<String>) -> Self {
        Self::Syntax {
            input: input.into(),
        }
    }
}

/// Result alias for color operations.
pub type Result<T> = std::result::Result<T, Error>;
