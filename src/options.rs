//! Configuration options for float recognition and representation.
//!
//! This module provides types to customize how floats are read and written:
//!
//! - [`Style`]: Letter case used for `.nan` and `.inf`
//! - [`Grammar`]: Which literal forms the recognizer accepts
//! - [`FloatOptions`]: Main configuration struct bundling the two
//!
//! ## Examples
//!
//! ```rust
//! use yaml_float::{FloatOptions, Grammar, Style, to_string_with_options};
//!
//! let options = FloatOptions::new().with_style(Style::Uppercase);
//! assert_eq!(to_string_with_options(f64::NAN, &options), ".NAN");
//!
//! let options = FloatOptions::new().with_grammar(Grammar::Extended);
//! assert!(options.resolve_str("1_000.5"));
//! ```

use crate::de;
use crate::error::{Error, Result};
use crate::ser;
use crate::value::ScalarText;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display style for the special values NaN and ±infinity.
///
/// Finite values, including negative zero, are written the same in every style.
///
/// # Examples
///
/// ```rust
/// use yaml_float::Style;
///
/// assert_eq!(Style::Camelcase.as_str(), "camelcase");
/// assert_eq!(Style::Default.resolved(), Style::Lowercase);
/// assert_eq!("uppercase".parse::<Style>().unwrap(), Style::Uppercase);
/// assert!("titlecase".parse::<Style>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Lowercase,
    Uppercase,
    Camelcase,
    /// No explicit style; behaves as [`Style::Lowercase`].
    Default,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 4] = [
        Style::Lowercase,
        Style::Uppercase,
        Style::Camelcase,
        Style::Default,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Style::Lowercase => "lowercase",
            Style::Uppercase => "uppercase",
            Style::Camelcase => "camelcase",
            Style::Default => "default",
        }
    }

    /// Maps [`Style::Default`] to the concrete style it stands for.
    #[must_use]
    pub const fn resolved(self) -> Style {
        match self {
            Style::Default => Style::Lowercase,
            other => other,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| Error::unsupported_style(s))
    }
}

/// Which float literal forms the recognizer accepts.
///
/// - **Strict**: Default. Optional `-`, decimal digits, optional fraction and exponent,
///   plus `.inf` / `.nan` in three letter cases
/// - **Extended**: Strict plus a leading `+`, `_` digit separators, leading-dot
///   fractions (`.5`) and sexagesimal values (`1:30.5`)
///
/// The constructor understands both; only recognition differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    #[default]
    Strict,
    Extended,
}

impl Grammar {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Grammar::Strict => "strict",
            Grammar::Extended => "extended",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grammar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strict" => Ok(Grammar::Strict),
            "extended" => Ok(Grammar::Extended),
            other => Err(Error::unsupported_grammar(other)),
        }
    }
}

/// Configuration options for reading and writing floats.
///
/// # Examples
///
/// ```rust
/// use yaml_float::{FloatOptions, Grammar, Style};
///
/// // Default: strict grammar, lowercase style
/// let options = FloatOptions::new();
/// assert_eq!(options.style, Style::Lowercase);
/// assert_eq!(options.grammar, Grammar::Strict);
///
/// let options = FloatOptions::new()
///     .with_style(Style::Camelcase)
///     .with_grammar(Grammar::Extended);
/// assert_eq!(options.represent(f64::INFINITY), ".Inf");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatOptions {
    pub style: Style,
    pub grammar: Grammar,
}

impl FloatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display style used by [`FloatOptions::represent`].
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the grammar used by [`FloatOptions::resolve`].
    #[must_use]
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Recognizes `input` under the configured grammar.
    #[must_use]
    pub fn resolve(&self, input: &ScalarText<'_>) -> bool {
        de::resolve_with(input, self.grammar)
    }

    /// Shorthand for [`FloatOptions::resolve`] on raw text.
    #[must_use]
    pub fn resolve_str(&self, text: &str) -> bool {
        self.resolve(&ScalarText::Text(text))
    }

    /// Represents `value` in the configured style.
    #[must_use]
    pub fn represent(&self, value: f64) -> String {
        ser::represent(value, self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names_round_trip() {
        for style in Style::ALL {
            assert_eq!(style.as_str().parse::<Style>(), Ok(style));
            assert_eq!(style.to_string(), style.as_str());
        }
    }

    #[test]
    fn test_unknown_style() {
        assert_eq!(
            "Lowercase".parse::<Style>(),
            Err(Error::UnsupportedStyle("Lowercase".to_string()))
        );
    }

    #[test]
    fn test_default_style_resolves_to_lowercase() {
        assert_eq!(Style::default(), Style::Lowercase);
        assert_eq!(Style::Default.resolved(), Style::Lowercase);
        assert_eq!(Style::Uppercase.resolved(), Style::Uppercase);
    }

    #[test]
    fn test_grammar_from_str() {
        assert_eq!("strict".parse::<Grammar>(), Ok(Grammar::Strict));
        assert_eq!("extended".parse::<Grammar>(), Ok(Grammar::Extended));
        assert!("loose".parse::<Grammar>().is_err());
    }

    #[test]
    fn test_options_from_json() {
        let options: FloatOptions =
            serde_json::from_str(r#"{"style":"camelcase","grammar":"extended"}"#).unwrap();
        assert_eq!(options.style, Style::Camelcase);
        assert_eq!(options.grammar, Grammar::Extended);

        let options: FloatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, FloatOptions::default());
    }

    #[test]
    fn test_options_resolve_follows_grammar() {
        let strict = FloatOptions::new();
        let extended = FloatOptions::new().with_grammar(Grammar::Extended);
        assert!(!strict.resolve_str("+1.5"));
        assert!(extended.resolve_str("+1.5"));
    }
}
