//! Walk a handful of scalars through the float type the way a schema would.
//!
//! Run with: `cargo run --example round_trip`

use yaml_float::{Grammar, ScalarText, Style, FLOAT_TYPE};

fn main() {
    let scalars = ["-0.0", "3.25", "6.8523015e+5", "+.INF", ".NaN", "1:30.5", "nan"];

    println!("=== {} ({}) ===\n", FLOAT_TYPE.tag, FLOAT_TYPE.kind);

    for text in scalars {
        let scalar = ScalarText::Text(text);
        match FLOAT_TYPE.try_construct(&scalar) {
            Some(Ok(value)) => {
                println!(
                    "{:>14} -> {:<10} lowercase={} uppercase={} camelcase={}",
                    text,
                    value,
                    FLOAT_TYPE.represent_default(value, None),
                    FLOAT_TYPE.represent_default(value, Some(Style::Uppercase)),
                    FLOAT_TYPE.represent_default(value, Some(Style::Camelcase)),
                );
            }
            Some(Err(err)) => println!("{:>14} -> error: {}", text, err),
            None => {
                let extended = yaml_float::resolve_with(&scalar, Grammar::Extended);
                println!(
                    "{:>14} -> not a strict float literal (extended grammar: {})",
                    text,
                    if extended { "accepted" } else { "rejected" }
                );
            }
        }
    }
}
