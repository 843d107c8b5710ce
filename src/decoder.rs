//! Decoding logic: numeral string to decimal value
//!
//! Integer digits are accumulated exactly and rounded to `f64` once; fractional
//! digits are summed as `digit / b^(i+1)`.

use crate::alphabet::value_of;
use crate::error::{NumeralError, NumeralResult};
use crate::radix::Radix;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};

/// A numeral split into sign, integer digits and fractional digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralParts<'a> {
    pub negative: bool,
    pub integer: &'a str,
    pub fraction: &'a str,
}

/// Split a numeral on its sign and radix point.
///
/// Digits are not validated here.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidDigitSymbol`] if the numeral contains more than one `.`,
/// or if a `-` sign is not followed by any digit.
pub fn split_numeral(numeral: &str) -> NumeralResult<NumeralParts<'_>> {
    let s = numeral.trim();

    let (negative, s) = match s.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, s),
    };

    let (integer, fraction) = match s.split_once('.') {
        Some((_, fraction)) if fraction.contains('.') => {
            return Err(NumeralError::InvalidDigitSymbol('.'));
        }
        Some(parts) => parts,
        None => (s, ""),
    };

    if negative && integer.is_empty() && fraction.is_empty() {
        return Err(NumeralError::InvalidDigitSymbol('-'));
    }

    Ok(NumeralParts {
        negative,
        integer,
        fraction,
    })
}

/// Decode a numeral in the given radix
///
/// # Errors
///
/// Returns [`NumeralError::InvalidDigitSymbol`] for any character outside the
/// digit alphabet (other than one leading `-` and one `.`).
pub fn decode(numeral: &str, radix: Radix) -> NumeralResult<f64> {
    let parts = split_numeral(numeral)?;
    let case_insensitive = radix.is_case_insensitive();

    let magnitude = match radix {
        Radix::Positive(b) => decode_positive(&parts, b, case_insensitive)?,
        Radix::Negative(b) => decode_negative(&parts, b, case_insensitive)?,
    };

    Ok(if parts.negative { -magnitude } else { magnitude })
}

fn decode_positive(
    parts: &NumeralParts<'_>,
    radix: u32,
    case_insensitive: bool,
) -> NumeralResult<f64> {
    let integer = integer_value(parts.integer, i64::from(radix), case_insensitive)?;
    let fraction = fraction_value(parts.fraction, radix, case_insensitive)?;
    Ok(to_float(&integer) + fraction)
}

fn decode_negative(
    parts: &NumeralParts<'_>,
    magnitude: u32,
    case_insensitive: bool,
) -> NumeralResult<f64> {
    // The negative radix supplies the alternating sign of the integer places
    let integer = integer_value(parts.integer, -i64::from(magnitude), case_insensitive)?;

    // Fractional digits are read with the magnitude, then the whole fraction
    // flips sign when it has an odd number of digits
    let mut fraction = fraction_value(parts.fraction, magnitude, case_insensitive)?;
    if parts.fraction.chars().count() % 2 == 1 {
        fraction = -fraction;
    }

    Ok(to_float(&integer) + fraction)
}

/// Positional evaluation `Σ d_i * radix^i` by Horner's rule; empty input is 0
fn integer_value(digits: &str, radix: i64, case_insensitive: bool) -> NumeralResult<BigInt> {
    let radix = BigInt::from(radix);
    digits.chars().try_fold(BigInt::zero(), |acc, symbol| {
        Ok(acc * &radix + digit_value(symbol, case_insensitive)?)
    })
}

/// `Σ d_i / base^(i+1)` over digits left to right
fn fraction_value(digits: &str, base: u32, case_insensitive: bool) -> NumeralResult<f64> {
    let base = f64::from(base);
    let mut value = 0.0;
    for (i, symbol) in digits.chars().enumerate() {
        let place = base.powi(i32::try_from(i + 1).unwrap_or(i32::MAX));
        value += f64::from(digit_value(symbol, case_insensitive)?) / place;
    }
    Ok(value)
}

/// Digit values are not checked against the radix: `9` in radix 2 is read as 9.
fn digit_value(symbol: char, case_insensitive: bool) -> NumeralResult<u32> {
    if case_insensitive {
        value_of(symbol.to_ascii_lowercase())
    } else {
        value_of(symbol)
    }
}

fn to_float(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(if n.sign() == Sign::Minus {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radix(r: i32) -> Radix {
        Radix::new(r).unwrap()
    }

    #[test]
    fn test_split_numeral() {
        let parts = split_numeral("-1a.2b").unwrap();
        assert!(parts.negative);
        assert_eq!(parts.integer, "1a");
        assert_eq!(parts.fraction, "2b");

        let parts = split_numeral(" 42 ").unwrap();
        assert!(!parts.negative);
        assert_eq!(parts.integer, "42");
        assert_eq!(parts.fraction, "");
    }

    #[test]
    fn test_split_rejects_second_point() {
        assert_eq!(
            split_numeral("1.2.3"),
            Err(NumeralError::InvalidDigitSymbol('.'))
        );
    }

    #[test]
    fn test_sign_without_digits() {
        for numeral in ["-", " - ", "-."] {
            assert_eq!(
                split_numeral(numeral),
                Err(NumeralError::InvalidDigitSymbol('-'))
            );
        }
        assert_eq!(
            decode("-", Radix::Negative(2)),
            Err(NumeralError::InvalidDigitSymbol('-'))
        );
        assert_eq!(decode("-.5", radix(10)).unwrap(), -0.5);
    }

    #[test]
    fn test_decode_positive_integer() {
        assert_eq!(decode("ff", radix(16)).unwrap(), 255.0);
        assert_eq!(decode("FF", radix(16)).unwrap(), 255.0);
        assert_eq!(decode("101", radix(2)).unwrap(), 5.0);
        assert_eq!(decode("-101", radix(2)).unwrap(), -5.0);
    }

    #[test]
    fn test_decode_positive_fraction() {
        assert_eq!(decode("0.1", radix(2)).unwrap(), 0.5);
        assert_eq!(decode("0.8", radix(16)).unwrap(), 0.5);
        assert_eq!(decode(".11", radix(2)).unwrap(), 0.75);
        assert_eq!(decode("-1.1", radix(2)).unwrap(), -1.5);
    }

    #[test]
    fn test_decode_empty_parts() {
        assert_eq!(decode("", radix(10)).unwrap(), 0.0);
        assert_eq!(decode("7.", radix(10)).unwrap(), 7.0);
    }

    #[test]
    fn test_digit_above_radix_is_accepted() {
        assert_eq!(decode("9", radix(2)).unwrap(), 9.0);
        assert_eq!(decode("12", radix(2)).unwrap(), 4.0);
    }

    #[test]
    fn test_case_sensitive_above_36() {
        assert_eq!(decode("a", radix(62)).unwrap(), 10.0);
        assert_eq!(decode("A", radix(62)).unwrap(), 36.0);
        assert_eq!(decode("Z", radix(62)).unwrap(), 61.0);
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            decode("12#4", radix(10)),
            Err(NumeralError::InvalidDigitSymbol('#'))
        );
        assert_eq!(
            decode("1.2-", radix(10)),
            Err(NumeralError::InvalidDigitSymbol('-'))
        );
    }

    #[test]
    fn test_decode_negative_integer() {
        // 1*4 + 0*(-2) + 1*1
        assert_eq!(decode("101", radix(-2)).unwrap(), 5.0);
        assert_eq!(decode("11", radix(-2)).unwrap(), -1.0);
        assert_eq!(decode("19", radix(-10)).unwrap(), -1.0);
    }

    #[test]
    fn test_decode_negative_fraction_parity() {
        // Odd digit count negates the fraction
        assert_eq!(decode("0.1", radix(-2)).unwrap(), -0.5);
        // Even digit count keeps it
        assert_eq!(decode("0.11", radix(-2)).unwrap(), 0.75);
        assert_eq!(decode("11.1", radix(-2)).unwrap(), -1.5);
    }

    #[test]
    fn test_large_integer_rounds_once() {
        let numeral = "1".repeat(70);
        let expected = (2.0_f64).powi(70) - 1.0;
        assert_eq!(decode(&numeral, radix(2)).unwrap(), expected);
    }
}
