//! Encoding logic: decimal value to numeral string
//!
//! The integer part is expanded exactly on big integers. The fractional part is
//! expanded by repeated multiplication, stopping when it terminates or after
//! `precision` digits (truncation, no rounding).

use crate::alphabet::symbol_of;
use crate::error::{NumeralError, NumeralResult};
use crate::radix::Radix;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

/// Encode a value in the given radix with at most `precision` fractional digits
///
/// # Errors
///
/// Returns [`NumeralError::NonFiniteValue`] for NaN and infinities.
pub fn encode(value: f64, radix: Radix, precision: usize) -> NumeralResult<String> {
    if !value.is_finite() {
        return Err(NumeralError::NonFiniteValue(value));
    }
    match radix {
        Radix::Positive(b) => encode_positive(value, b, precision),
        Radix::Negative(b) => encode_negative(value, b, precision),
    }
}

fn encode_positive(value: f64, radix: u32, precision: usize) -> NumeralResult<String> {
    if value == 0.0 {
        return Ok("0".to_string());
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    let integer = magnitude.trunc();

    let mut out = String::with_capacity(16 + precision);
    if negative {
        out.push('-');
    }

    // Repeated `n % radix`, `n / radix`; digits come out least significant first
    let radix_big = BigInt::from(radix);
    let mut n = to_big(integer)?;
    let mut digits = Vec::new();
    loop {
        digits.push(digit_symbol(&(&n % &radix_big))?);
        n /= &radix_big;
        if n.is_zero() {
            break;
        }
    }
    out.extend(digits.iter().rev());

    push_fraction(&mut out, magnitude - integer, radix, precision)?;

    // A value too small to show at this precision must not keep its sign
    if negative && !has_nonzero_digit(&out) {
        out.remove(0);
    }
    Ok(out)
}

fn encode_negative(value: f64, magnitude: u32, precision: usize) -> NumeralResult<String> {
    let integer = value.trunc();
    let fraction = value - integer;

    let mut out = String::with_capacity(16 + precision);

    let radix = -BigInt::from(magnitude);
    let base = BigInt::from(magnitude);
    let mut n = to_big(integer)?;
    if n.is_zero() {
        out.push('0');
    } else {
        let mut digits = Vec::new();
        while !n.is_zero() {
            // Balanced division: remainder must land in [0, b)
            let mut quotient = &n / &radix;
            let mut remainder = &n % &radix;
            if remainder.is_negative() {
                quotient += 1u32;
                remainder += &base;
            }
            digits.push(digit_symbol(&remainder)?);
            n = quotient;
        }
        out.extend(digits.iter().rev());
    }

    // Approximation: the fraction magnitude is expanded in base b, not -b
    push_fraction(&mut out, fraction.abs(), magnitude, precision)?;
    Ok(out)
}

/// Append `.` and up to `precision` digits of `fraction` (in `[0, 1)`) in `base`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn push_fraction(
    out: &mut String,
    mut fraction: f64,
    base: u32,
    precision: usize,
) -> NumeralResult<()> {
    if fraction == 0.0 || precision == 0 {
        return Ok(());
    }

    let base = f64::from(base);
    out.push('.');
    for _ in 0..precision {
        fraction *= base;
        let digit = fraction.floor();
        out.push(symbol_of(digit as u32)?);
        fraction -= digit;
        if fraction == 0.0 {
            return Ok(());
        }
    }

    tracing::trace!(precision, remainder = fraction, "fractional expansion truncated");
    Ok(())
}

fn to_big(integer: f64) -> NumeralResult<BigInt> {
    BigInt::from_f64(integer).ok_or(NumeralError::NonFiniteValue(integer))
}

/// Out-of-range remainders map onto an invalid digit value
fn digit_symbol(remainder: &BigInt) -> NumeralResult<char> {
    symbol_of(remainder.to_u32().unwrap_or(u32::MAX))
}

fn has_nonzero_digit(numeral: &str) -> bool {
    numeral.bytes().any(|b| !matches!(b, b'0' | b'.' | b'-'))
}
