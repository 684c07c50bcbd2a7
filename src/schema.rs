//! Scalar type descriptor registered with a host schema.
//!
//! A schema keeps one [`ScalarType`] per tag and drives it through the
//! scalar-resolution protocol: ask `resolve`, call `construct` on success, and
//! pick `predicate` plus `represent` when writing a value back out.
//!
//! ```rust
//! use yaml_float::{Kind, ScalarText, FLOAT_TYPE};
//!
//! assert_eq!(FLOAT_TYPE.tag, "tag:yaml.org,2002:float");
//! assert_eq!(FLOAT_TYPE.kind, Kind::Scalar);
//!
//! let scalar = ScalarText::Text("-0.0");
//! assert!((FLOAT_TYPE.resolve)(&scalar));
//! let value = (FLOAT_TYPE.construct)(&scalar).unwrap();
//! assert!((FLOAT_TYPE.predicate)(&value));
//! assert_eq!(FLOAT_TYPE.represent_default(value, None), "-0.0");
//! ```

use crate::error::Result;
use crate::options::Style;
use crate::value::ScalarText;
use crate::{de, ser, value};
use std::any::Any;
use std::fmt;

/// YAML tag of the float type.
pub const FLOAT_TAG: &str = "tag:yaml.org,2002:float";

/// Node kind a type descriptor applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar,
    Sequence,
    Mapping,
}

impl Kind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Scalar => "scalar",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type ResolveFn = fn(&ScalarText<'_>) -> bool;
pub type ConstructFn = fn(&ScalarText<'_>) -> Result<f64>;
pub type PredicateFn = fn(&dyn Any) -> bool;
pub type RepresentFn = fn(f64, Style) -> String;

/// A scalar type record: tag, kind, the four float functions and a default style.
#[derive(Clone, Copy, Debug)]
pub struct ScalarType {
    pub tag: &'static str,
    pub kind: Kind,
    pub resolve: ResolveFn,
    pub construct: ConstructFn,
    pub predicate: PredicateFn,
    pub represent: RepresentFn,
    pub default_style: Style,
}

impl ScalarType {
    /// Represents `value`, substituting [`ScalarType::default_style`] when no
    /// style is given.
    #[must_use]
    pub fn represent_default(&self, value: f64, style: Option<Style>) -> String {
        (self.represent)(value, style.unwrap_or(self.default_style))
    }

    /// Resolves then constructs, the way a dispatcher would.
    ///
    /// `None` means the scalar is not of this type.
    pub fn try_construct(&self, input: &ScalarText<'_>) -> Option<Result<f64>> {
        if (self.resolve)(input) {
            Some((self.construct)(input))
        } else {
            None
        }
    }
}

/// Descriptor for `tag:yaml.org,2002:float`.
pub const FLOAT_TYPE: ScalarType = ScalarType {
    tag: FLOAT_TAG,
    kind: Kind::Scalar,
    resolve: de::resolve,
    construct: de::construct,
    predicate: value::is_float,
    represent: ser::represent,
    default_style: Style::Lowercase,
};
