//! Float recognition and construction.
//!
//! This module holds the read side of the float type:
//!
//! - [`resolve`] / [`resolve_with`]: Decide whether a scalar is a float literal
//! - [`construct`]: Turn recognized text into an `f64`
//!
//! ## Recognition
//!
//! Both grammars are compiled once into process-wide statics and matched
//! against the whole scalar. The strict grammar accepts
//!
//! ```text
//! -?(0|[1-9][0-9]*)(\.[0-9]*)?([eE][-+]?[0-9]+)?
//! [-+]?\.(inf|Inf|INF)
//! \.(nan|NaN|NAN)
//! ```
//!
//! The extended grammar adds a leading `+`, `_` separators, `.5`-style
//! fractions and sexagesimal values.
//!
//! ## Construction
//!
//! The constructor is wider than the strict recognizer: underscores are
//! dropped and colon-separated parts are summed in base 60 no matter which
//! grammar recognized the text.
//!
//! ```rust
//! use yaml_float::{construct, resolve, ScalarText};
//!
//! let scalar = ScalarText::Text("1:30.5");
//! assert!(!resolve(&scalar));
//! assert_eq!(construct(&scalar).unwrap(), 90.5);
//! ```

use crate::error::{Error, Result};
use crate::options::Grammar;
use crate::value::ScalarText;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

static STRICT_FLOAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?",
        r"|[-+]?\.(?:inf|Inf|INF)",
        r"|\.(?:nan|NaN|NAN)",
        r")$",
    ))
    .expect("strict float pattern compiles")
});

static EXTENDED_FLOAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"[-+]?[0-9][0-9_]*(?:\.[0-9_]*)?(?:[eE][-+]?[0-9]+)?",
        r"|[-+]?\.[0-9][0-9_]*(?:[eE][-+]?[0-9]+)?",
        r"|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+(?:\.[0-9_]*)?",
        r"|[-+]?\.(?:inf|Inf|INF)",
        r"|\.(?:nan|NaN|NAN)",
        r")$",
    ))
    .expect("extended float pattern compiles")
});

fn pattern(grammar: Grammar) -> &'static Regex {
    match grammar {
        Grammar::Strict => &STRICT_FLOAT_PATTERN,
        Grammar::Extended => &EXTENDED_FLOAT_PATTERN,
    }
}

/// Recognizes a float scalar under the strict grammar.
///
/// Resolved nodes are always accepted and the absent marker never is.
///
/// # Examples
///
/// ```rust
/// use yaml_float::{resolve, ScalarText};
///
/// assert!(resolve(&ScalarText::Text("6.8523015e+5")));
/// assert!(resolve(&ScalarText::Text("+.INF")));
/// assert!(!resolve(&ScalarText::Text("nan")));
/// assert!(!resolve(&ScalarText::Text("")));
/// ```
#[must_use]
pub fn resolve(input: &ScalarText<'_>) -> bool {
    resolve_with(input, Grammar::Strict)
}

/// Recognizes a float scalar under the given grammar.
///
/// # Examples
///
/// ```rust
/// use yaml_float::{resolve_with, Grammar, ScalarText};
///
/// let scalar = ScalarText::Text("685_230.15");
/// assert!(!resolve_with(&scalar, Grammar::Strict));
/// assert!(resolve_with(&scalar, Grammar::Extended));
/// ```
#[must_use]
pub fn resolve_with(input: &ScalarText<'_>, grammar: Grammar) -> bool {
    match input {
        ScalarText::Resolved(_) => true,
        ScalarText::Absent => false,
        ScalarText::Text(text) => pattern(grammar).is_match(text),
    }
}

/// Constructs an `f64` from a scalar.
///
/// Resolved nodes are returned unchanged. Text is stripped of `_`, lowercased,
/// split from its sign, and then read as `.inf`, `.nan`, a sexagesimal value
/// or a plain decimal. Negative zero survives.
///
/// # Errors
///
/// Returns [`Error::Absent`] for the absent marker and [`Error::InvalidFloat`]
/// for text the float parser rejects. Neither happens for input the recognizer
/// accepted.
///
/// # Examples
///
/// ```rust
/// use yaml_float::{construct, ScalarText};
///
/// assert_eq!(construct(&ScalarText::Text("-1:00")).unwrap(), -60.0);
/// assert!(construct(&ScalarText::Text("-0.0")).unwrap().is_sign_negative());
/// assert!(construct(&ScalarText::Text(".NaN")).unwrap().is_nan());
/// ```
pub fn construct(input: &ScalarText<'_>) -> Result<f64> {
    let text = match input {
        ScalarText::Resolved(value) => return Ok(*value),
        ScalarText::Absent => return Err(Error::Absent),
        ScalarText::Text(text) => *text,
    };

    let normalized = text.replace('_', "").to_lowercase();
    let (negative, body) = match normalized.as_bytes().first() {
        Some(b'-') => (true, &normalized[1..]),
        Some(b'+') => (false, &normalized[1..]),
        _ => (false, normalized.as_str()),
    };

    let magnitude = match body {
        ".inf" => f64::INFINITY,
        ".nan" => return Ok(f64::NAN),
        _ if body.contains(':') => construct_sexagesimal(text, body)?,
        _ => parse_part(text, body)?,
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Sums colon-separated parts right to left, each weighted by the next power of 60.
fn construct_sexagesimal(text: &str, body: &str) -> Result<f64> {
    let (value, _) = body
        .split(':')
        .rev()
        .try_fold((0.0, 1.0), |(sum, base), part| {
            let digit = parse_part(text, part)?;
            Ok::<_, Error>((sum + digit * base, base * 60.0))
        })?;

    trace!(text, value, "constructed sexagesimal float");
    Ok(value)
}

/// Parses one unsigned numeric part. `inf`, `nan` and nested signs are left
/// to the caller and rejected here.
fn parse_part(text: &str, part: &str) -> Result<f64> {
    if !part.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        debug!(text, part, "float part does not start with a digit");
        return Err(Error::invalid_float(text, "expected a digit or '.'"));
    }

    part.parse::<f64>().map_err(|err| {
        debug!(text, part, %err, "float part rejected by parser");
        Error::invalid_float(text, err)
    })
}
