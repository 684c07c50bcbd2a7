//! Scalar inputs and float values.
//!
//! This module provides the types the four float functions operate on:
//!
//! - [`ScalarText`]: What the schema dispatcher hands in (raw text, the absent marker,
//!   or an already-resolved node)
//! - [`YamlFloat`]: An `f64` newtype that reads and writes canonical YAML float text
//!   through `Display`, `FromStr` and serde
//!
//! It also hosts the classifier, [`is_float`] and [`is_float_value`].
//!
//! ## Examples
//!
//! ```rust
//! use yaml_float::{construct, ScalarText, YamlFloat};
//!
//! let value = construct(&ScalarText::Text("-.inf")).unwrap();
//! assert_eq!(value, f64::NEG_INFINITY);
//!
//! let float: YamlFloat = "-0.0".parse().unwrap();
//! assert_eq!(float.to_string(), "-0.0");
//! ```

use crate::error::{Error, Result};
use crate::options::{Grammar, Style};
use crate::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::Any;
use std::fmt;
use std::str::FromStr;

/// A scalar as supplied by the schema dispatcher.
///
/// Recognizer and constructor both switch on this tag first.
///
/// # Examples
///
/// ```rust
/// use yaml_float::{resolve, ScalarText};
///
/// assert!(resolve(&ScalarText::Text("0.5")));
/// assert!(resolve(&ScalarText::Resolved(2.0)));
/// assert!(!resolve(&ScalarText::Absent));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarText<'a> {
    /// A raw token from the source document.
    Text(&'a str),
    /// The null/absent marker.
    Absent,
    /// A node whose value was constructed programmatically.
    Resolved(f64),
}

impl<'a> ScalarText<'a> {
    /// Returns the raw text, if any.
    #[inline]
    #[must_use]
    pub const fn as_text(&self) -> Option<&'a str> {
        match self {
            ScalarText::Text(text) => Some(*text),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, ScalarText::Resolved(_))
    }
}

impl<'a> From<&'a str> for ScalarText<'a> {
    fn from(text: &'a str) -> Self {
        ScalarText::Text(text)
    }
}

impl<'a> From<Option<&'a str>> for ScalarText<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(ScalarText::Absent, ScalarText::Text)
    }
}

impl From<f64> for ScalarText<'_> {
    fn from(value: f64) -> Self {
        ScalarText::Resolved(value)
    }
}

/// Returns `true` if `value` has a fractional part or is negative zero.
///
/// Integral floats such as `4.0` are not reported, since the classifier tracks
/// display intent rather than storage type. Infinities and NaN have no
/// integral value and are reported.
///
/// # Examples
///
/// ```rust
/// use yaml_float::is_float_value;
///
/// assert!(!is_float_value(4.0));
/// assert!(is_float_value(4.5));
/// assert!(is_float_value(-0.0));
/// assert!(!is_float_value(0.0));
/// ```
#[inline]
#[must_use]
pub fn is_float_value(value: f64) -> bool {
    value % 1.0 != 0.0 || is_negative_zero(value)
}

/// Runtime-typed classifier used by the schema descriptor.
///
/// Only `f64` and `f32` values qualify; anything else, integers included, is rejected.
///
/// # Examples
///
/// ```rust
/// use yaml_float::is_float;
///
/// assert!(is_float(&1.5f64));
/// assert!(is_float(&-0.0f32));
/// assert!(!is_float(&3i32));
/// assert!(!is_float(&"1.5"));
/// ```
#[must_use]
pub fn is_float(object: &dyn Any) -> bool {
    if let Some(value) = object.downcast_ref::<f64>() {
        is_float_value(*value)
    } else if let Some(value) = object.downcast_ref::<f32>() {
        is_float_value(f64::from(*value))
    } else {
        false
    }
}

#[inline]
pub(crate) fn is_negative_zero(value: f64) -> bool {
    value == 0.0 && value.is_sign_negative()
}

/// An `f64` that reads and writes YAML float text.
///
/// - `Display` and `Serialize` emit the lowercase canonical form
/// - `FromStr` accepts the strict grammar
/// - `Deserialize` accepts any number as is, or a string in the extended grammar
///
/// # Examples
///
/// ```rust
/// use yaml_float::YamlFloat;
///
/// let speed = YamlFloat(f64::INFINITY);
/// assert_eq!(serde_json::to_string(&speed).unwrap(), "\".inf\"");
///
/// let back: YamlFloat = serde_json::from_str("\"1:30.5\"").unwrap();
/// assert_eq!(back, YamlFloat(90.5));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlFloat(pub f64);

impl YamlFloat {
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> f64 {
        self.0
    }

    /// Canonical text in the given style.
    #[must_use]
    pub fn represent(&self, style: Style) -> String {
        ser::represent(self.0, style)
    }
}

impl PartialEq for YamlFloat {
    /// Bitwise on the sign of zero, and NaN equals NaN.
    fn eq(&self, other: &Self) -> bool {
        if self.0.is_nan() && other.0.is_nan() {
            return true;
        }
        self.0 == other.0 && self.0.is_sign_negative() == other.0.is_sign_negative()
    }
}

impl From<f64> for YamlFloat {
    fn from(value: f64) -> Self {
        YamlFloat(value)
    }
}

impl From<YamlFloat> for f64 {
    fn from(value: YamlFloat) -> Self {
        value.0
    }
}

impl fmt::Display for YamlFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ser::write_float(f, self.0, Style::Lowercase)
    }
}

impl FromStr for YamlFloat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s).map(YamlFloat)
    }
}

impl Serialize for YamlFloat {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ser::represent(self.0, Style::Lowercase))
    }
}

impl<'de> Deserialize<'de> for YamlFloat {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct YamlFloatVisitor;

        impl<'de> Visitor<'de> for YamlFloatVisitor {
            type Value = YamlFloat;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or a YAML float literal")
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(YamlFloat(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(YamlFloat(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(YamlFloat(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                let scalar = ScalarText::Text(value);
                if !crate::de::resolve_with(&scalar, Grammar::Extended) {
                    return Err(E::invalid_value(de::Unexpected::Str(value), &self));
                }
                crate::de::construct(&scalar)
                    .map(YamlFloat)
                    .map_err(E::custom)
            }
        }

        deserializer.deserialize_any(YamlFloatVisitor)
    }
}
