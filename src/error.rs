//! Error types for float recognition, construction and style parsing.
//!
//! Recognition itself never fails: [`resolve`](crate::resolve) answers `false`
//! for text it does not accept. Errors show up on the paths that have to
//! produce a value:
//!
//! - **Unrecognized**: [`from_str`](crate::from_str) was given text that is not a float literal
//! - **Invalid Float**: the constructor met residual text the float parser rejects
//! - **Absent**: the constructor was handed the null/absent marker
//! - **Unsupported Style / Grammar**: a configuration name outside the known set
//!
//! ## Examples
//!
//! ```rust
//! use yaml_float::{from_str, Error};
//!
//! let result = from_str("1.2.3");
//! assert!(matches!(result, Err(Error::Unrecognized(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Text rejected by the recognizer
    #[error("Not a float literal: {0:?}")]
    Unrecognized(String),

    /// Residual text the float parser could not read
    #[error("Invalid float {text:?}: {reason}")]
    InvalidFloat { text: String, reason: String },

    /// The absent marker has no numeric value
    #[error("Cannot construct a float from an absent scalar")]
    Absent,

    /// Unknown style name
    #[error("Unsupported style: {0:?} (expected lowercase, uppercase, camelcase or default)")]
    UnsupportedStyle(String),

    /// Unknown grammar name
    #[error("Unsupported grammar: {0:?} (expected strict or extended)")]
    UnsupportedGrammar(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unrecognized-literal error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml_float::Error;
    ///
    /// let err = Error::unrecognized("nan");
    /// assert!(err.to_string().contains("\"nan\""));
    /// ```
    pub fn unrecognized(text: &str) -> Self {
        Error::Unrecognized(text.to_string())
    }

    /// Creates an invalid float error for text the native parser rejected.
    pub fn invalid_float<T: fmt::Display>(text: &str, reason: T) -> Self {
        Error::InvalidFloat {
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unsupported_style(name: &str) -> Self {
        Error::UnsupportedStyle(name.to_string())
    }

    pub fn unsupported_grammar(name: &str) -> Self {
        Error::UnsupportedGrammar(name.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_float_message() {
        let err = Error::invalid_float("1.2.3", "invalid float literal");
        assert_eq!(
            err.to_string(),
            "Invalid float \"1.2.3\": invalid float literal"
        );
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::de::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }
}
