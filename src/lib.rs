//! # basenum
//!
//! Conversion between decimal values and numerals in any radix from 2 to 62,
//! including **negative radices** (-2 to -62), plus arithmetic carried out by
//! round-tripping operands through decimal.
//!
//! - **62-symbol alphabet**: `0-9`, then `a-z` (10-35), then `A-Z` (36-61)
//! - **Positive radices**: standard positional notation with a fractional part
//!   expanded to a bounded number of digits (truncated, never rounded)
//! - **Negative radices**: integers by balanced division, so every integer has
//!   a sign-free numeral; fractions are an approximation
//! - **Exact integer parts**: integer digits are computed on big integers
//!
//! ## Examples
//!
//! ```rust
//! use basenum::make_codec;
//!
//! let hex = make_codec(16).unwrap();
//! assert_eq!(hex.encode(255.0).unwrap(), "ff");
//! assert_eq!(hex.plus("ff", "1").unwrap(), "100");
//!
//! let bin = make_codec(2).unwrap();
//! assert_eq!(bin.encode_with_precision(0.5, 5).unwrap(), "0.1");
//! assert_eq!(bin.decode("0.1").unwrap(), 0.5);
//!
//! // 1·4 + 0·(-2) + 1·1
//! let negabinary = make_codec(-2).unwrap();
//! assert_eq!(negabinary.encode(5.0).unwrap(), "101");
//! assert_eq!(negabinary.decode("101").unwrap(), 5.0);
//! ```
//!
//! ## Numeral grammar
//!
//! ```text
//! numeral  := ["-"] intpart ["." fracpart]
//! intpart  := symbol*
//! fracpart := symbol*
//! ```
//!
//! Up to radix magnitude 36, letters are read case-insensitively. Above 36 the
//! case of a letter selects its digit value.

pub(crate) mod alphabet;
pub(crate) mod arithmetic;
pub(crate) mod catalog;
pub(crate) mod codec;
pub(crate) mod complex;
pub(crate) mod config;
pub(crate) mod constants;
pub(crate) mod decoder;
pub(crate) mod encoder;
pub(crate) mod error;
pub(crate) mod radix;
pub(crate) mod trig;

// Re-export main types and functions
pub use alphabet::{symbol_of, value_of, ALPHABET, MAX_RADIX};
pub use arithmetic::Operator;
pub use catalog::{constant_names, function_names, help};
pub use codec::{make_codec, Codec, Operand};
pub use complex::{root, Complex};
pub use config::CodecConfig;
pub use constants::{
    champernowne, init_constants, metallic_mean, nbonacci_ratio, Constants, DEFAULT_MAX_ITER,
    DEFAULT_TOLERANCE,
};
pub use error::{NumeralError, NumeralResult};
pub use radix::Radix;
pub use trig::{convert_angle, cos, cot, csc, sec, sin, tan, AngleUnit};
