//! YAML Float Literal Format
//!
//! This module documents the float literal forms read and written by this library.
//!
//! # Strict Grammar
//!
//! The default recognizer accepts exactly these forms, matched against the
//! whole scalar:
//!
//! ```text
//! float      ::= decimal | special
//! decimal    ::= ["-"] ( "0" | digit1-9 {digit} ) ["." {digit}] [exponent]
//! exponent   ::= ("e"|"E") ["+"|"-"] digit {digit}
//! special    ::= ["+"|"-"] "." ("inf" | "Inf" | "INF")
//!              | "." ("nan" | "NaN" | "NAN")
//! ```
//!
//! | Literal | Accepted | Value |
//! |---------|----------|-------|
//! | `0` | yes | `0.0` |
//! | `-0.0` | yes | negative zero |
//! | `12.` | yes | `12.0` |
//! | `6.8523015e+5` | yes | `685230.15` |
//! | `+.INF` | yes | `+inf` |
//! | `.NaN` | yes | NaN |
//! | `nan` | no | leading dot required |
//! | `-.nan` | no | NaN takes no sign |
//! | `+1.5` | no | only `-` is allowed on decimals |
//! | `01` | no | no leading zeros |
//! | `1_000.5` | no | see extended grammar |
//! | `1:30.5` | no | see extended grammar |
//!
//! # Extended Grammar
//!
//! [`Grammar::Extended`](crate::Grammar::Extended) adds the YAML 1.1 forms:
//!
//! ```text
//! [-+]?[0-9][0-9_]*(\.[0-9_]*)?([eE][-+]?[0-9]+)?
//! [-+]?\.[0-9][0-9_]*([eE][-+]?[0-9]+)?
//! [-+]?[0-9][0-9_]*(:[0-5]?[0-9])+(\.[0-9_]*)?
//! [-+]?\.(inf|Inf|INF)
//! \.(nan|NaN|NAN)
//! ```
//!
//! ## Sexagesimal Values
//!
//! Colon-separated parts are summed right to left in base 60:
//!
//! ```text
//! 1:30.5        = 1*60 + 30.5                 = 90.5
//! -1:00         = -(1*60 + 0)                 = -60.0
//! 190:20:30.15  = 190*3600 + 20*60 + 30.15    = 685230.15
//! ```
//!
//! # Construction
//!
//! The constructor does not depend on the grammar: it drops every `_`,
//! lowercases, takes an optional sign, and reads `.inf`, `.nan`, sexagesimal
//! or decimal text. Strictly recognized text is therefore always readable,
//! while some text the constructor reads (underscores, colons) is only
//! recognized under the extended grammar.
//!
//! # Representation
//!
//! - NaN and infinities follow the [`Style`](crate::Style) letter case
//! - Negative zero is always `-0.0`
//! - Other values use the shortest round-trip digits, in exponent form when
//!   the magnitude is at least `1e21` or below `1e-6`
//!
//! Every representation is accepted by the strict grammar.

// This module contains only documentation; no implementation code
