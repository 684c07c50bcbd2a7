//! Float representation.
//!
//! [`represent`] turns an `f64` back into canonical YAML float text:
//!
//! | Value | lowercase | uppercase | camelcase |
//! |-------|-----------|-----------|-----------|
//! | NaN | `.nan` | `.NAN` | `.NaN` |
//! | +inf | `.inf` | `.INF` | `.Inf` |
//! | -inf | `-.inf` | `-.INF` | `-.Inf` |
//! | -0.0 | `-0.0` | `-0.0` | `-0.0` |
//!
//! `Style::Default` writes like `Style::Lowercase`. Finite values use the
//! shortest digits that read back to the same `f64`, in plain decimal between
//! `1e-6` and `1e21` and in exponent form outside that range.
//!
//! ```rust
//! use yaml_float::{represent, Style};
//!
//! assert_eq!(represent(0.1, Style::Uppercase), "0.1");
//! assert_eq!(represent(4.0, Style::Lowercase), "4");
//! assert_eq!(represent(1e21, Style::Lowercase), "1e21");
//! assert_eq!(represent(1.5e-7, Style::Lowercase), "1.5e-7");
//! ```

use crate::options::Style;
use crate::value::is_negative_zero;
use std::fmt::{self, Write};

const EXPONENT_ABOVE: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Represents `value` as canonical text in `style`.
///
/// Every output is non-empty, accepted by the strict recognizer, and
/// constructs back to the same value (any NaN to a NaN).
///
/// # Examples
///
/// ```rust
/// use yaml_float::{represent, Style};
///
/// assert_eq!(represent(f64::NAN, Style::Camelcase), ".NaN");
/// assert_eq!(represent(f64::NEG_INFINITY, Style::Uppercase), "-.INF");
/// assert_eq!(represent(-0.0, Style::Uppercase), "-0.0");
/// ```
#[must_use]
pub fn represent(value: f64, style: Style) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = write_float(&mut output, value, style);
    output
}

/// Writes the representation of `value` into any [`fmt::Write`] sink.
///
/// # Errors
///
/// Only the errors of the underlying writer.
pub fn write_float<W: Write>(out: &mut W, value: f64, style: Style) -> fmt::Result {
    if value.is_nan() {
        return out.write_str(match style {
            Style::Lowercase | Style::Default => ".nan",
            Style::Uppercase => ".NAN",
            Style::Camelcase => ".NaN",
        });
    }

    if value.is_infinite() {
        if value.is_sign_negative() {
            out.write_char('-')?;
        }
        return out.write_str(match style {
            Style::Lowercase | Style::Default => ".inf",
            Style::Uppercase => ".INF",
            Style::Camelcase => ".Inf",
        });
    }

    if is_negative_zero(value) {
        return out.write_str("-0.0");
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        write!(out, "{:e}", value)
    } else {
        write!(out, "{}", value)
    }
}
