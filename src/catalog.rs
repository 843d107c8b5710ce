//! Introspection over the functions and constants this crate offers.

use crate::arithmetic::Operator;
use crate::constants::Constants;
use std::fmt::Write as _;

const FUNCTIONS: &[&str] = &[
    "make_codec",
    "decode",
    "encode",
    "champernowne",
    "metallic_mean",
    "nbonacci_ratio",
    "root",
    "sin",
    "cos",
    "tan",
    "cot",
    "sec",
    "csc",
    "convert_angle",
    "init_constants",
];

/// Names of the available functions
#[must_use]
pub fn function_names() -> &'static [&'static str] {
    FUNCTIONS
}

/// Names of the constants in `constants`, in lexicographic order
#[must_use]
pub fn constant_names(constants: &Constants) -> Vec<&'static str> {
    constants.names().collect()
}

/// Human-readable listing of functions and constants
#[must_use]
pub fn help(constants: &Constants) -> String {
    let mut out = String::from("functions:\n");
    for name in FUNCTIONS {
        let _ = writeln!(out, "  {name}");
    }
    out.push_str("operators:\n");
    for name in Operator::NAMES {
        let _ = writeln!(out, "  {name}");
    }
    out.push_str("constants:\n");
    for (name, value) in constants.iter() {
        let _ = writeln!(out, "  {name:<18} {value}");
    }
    out
}
