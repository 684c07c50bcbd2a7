//! # yaml_float
//!
//! The float scalar type (`tag:yaml.org,2002:float`) for YAML-like schemas.
//!
//! ## What does it do?
//!
//! A schema hands scalar text to each registered type and asks "is this yours?".
//! This crate answers that question for floats and does the conversions on
//! both sides:
//!
//! - **Recognize**: [`resolve`] checks a scalar against the float grammar
//! - **Construct**: [`construct`] turns recognized text into an `f64`, keeping
//!   negative zero, infinities, NaN and sexagesimal (`1:30.5`) values intact
//! - **Classify**: [`is_float`] tells whether an in-memory value should be written as a float
//! - **Represent**: [`represent`] writes canonical text in a chosen [`Style`]
//!
//! The four functions are bundled in the [`FLOAT_TYPE`] descriptor for schema registries.
//!
//! ## Quick Start
//!
//! ```rust
//! use yaml_float::{from_str, to_string};
//!
//! let value = from_str("-0.0").unwrap();
//! assert!(value.is_sign_negative());
//! assert_eq!(to_string(value), "-0.0");
//!
//! assert!(from_str(".NaN").unwrap().is_nan());
//! assert_eq!(to_string(f64::NEG_INFINITY), "-.inf");
//! ```
//!
//! ### Styles and Grammars
//!
//! ```rust
//! use yaml_float::{from_str_with_options, to_string_with_options, FloatOptions, Grammar, Style};
//!
//! let options = FloatOptions::new()
//!     .with_style(Style::Uppercase)
//!     .with_grammar(Grammar::Extended);
//!
//! assert_eq!(from_str_with_options("1_000.5", &options).unwrap(), 1000.5);
//! assert_eq!(to_string_with_options(f64::INFINITY, &options), ".INF");
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use yaml_float::YamlFloat;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Sample {
//!     duration: YamlFloat,
//! }
//!
//! let sample: Sample = serde_json::from_str(r#"{"duration":"1:30.5"}"#).unwrap();
//! assert_eq!(sample.duration, YamlFloat(90.5));
//! ```
//!
//! ## Guarantees
//!
//! - Every literal the recognizer accepts constructs without error
//! - Every output of [`represent`] is recognized and reads back bit-for-bit
//! - The compiled grammars are immutable statics, so all functions are thread-safe
//! - No `unsafe` code
//!
//! See [`format`] for the literal grammar.

pub mod de;
pub mod error;
pub mod format;
pub mod options;
pub mod schema;
pub mod ser;
pub mod value;

pub use de::{construct, resolve, resolve_with};
pub use error::{Error, Result};
pub use options::{FloatOptions, Grammar, Style};
pub use schema::{Kind, ScalarType, FLOAT_TAG, FLOAT_TYPE};
pub use ser::{represent, write_float};
pub use value::{is_float, is_float_value, ScalarText, YamlFloat};

use tracing::debug;

/// Parse a float literal under the strict grammar.
///
/// # Examples
///
/// ```rust
/// use yaml_float::from_str;
///
/// assert_eq!(from_str("6.8523015e+5").unwrap(), 685230.15);
/// assert_eq!(from_str("-.inf").unwrap(), f64::NEG_INFINITY);
/// assert!(from_str("1:30").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Unrecognized`] if the text is not a float literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<f64> {
    from_str_with_options(s, &FloatOptions::default())
}

/// Parse a float literal under the grammar configured in `options`.
///
/// # Examples
///
/// ```rust
/// use yaml_float::{from_str_with_options, FloatOptions, Grammar};
///
/// let options = FloatOptions::new().with_grammar(Grammar::Extended);
/// assert_eq!(from_str_with_options("190:20:30.15", &options).unwrap(), 685230.15);
/// ```
///
/// # Errors
///
/// Returns [`Error::Unrecognized`] if the text is not a float literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &FloatOptions) -> Result<f64> {
    let scalar = ScalarText::Text(s);
    if !options.resolve(&scalar) {
        debug!(text = s, grammar = %options.grammar, "rejected float literal");
        return Err(Error::unrecognized(s));
    }
    construct(&scalar)
}

/// Represent a float in the default (lowercase) style.
///
/// # Examples
///
/// ```rust
/// use yaml_float::to_string;
///
/// assert_eq!(to_string(0.5), "0.5");
/// assert_eq!(to_string(f64::NAN), ".nan");
/// ```
#[must_use]
pub fn to_string(value: f64) -> String {
    to_string_with_options(value, &FloatOptions::default())
}

/// Represent a float in the style configured in `options`.
///
/// # Examples
///
/// ```rust
/// use yaml_float::{to_string_with_options, FloatOptions, Style};
///
/// let options = FloatOptions::new().with_style(Style::Camelcase);
/// assert_eq!(to_string_with_options(f64::NAN, &options), ".NaN");
/// ```
#[must_use]
pub fn to_string_with_options(value: f64, options: &FloatOptions) -> String {
    options.represent(value)
}
