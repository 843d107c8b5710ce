//! The fixed 62-symbol digit alphabet shared by every codec.
//!
//! Order is part of the contract: `0-9` carry values 0-9, `a-z` carry 10-35
//! and `A-Z` carry 36-61.

use crate::error::{NumeralError, NumeralResult};

/// Digit symbols, indexed by digit value
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest radix magnitude the alphabet can express
#[allow(clippy::cast_possible_truncation)]
pub const MAX_RADIX: u32 = ALPHABET.len() as u32;

const NOT_A_DIGIT: u8 = u8::MAX;

/// Reverse lookup table from ASCII byte to digit value
const VALUES: [u8; 128] = build_value_table();

#[allow(clippy::cast_possible_truncation)]
const fn build_value_table() -> [u8; 128] {
    let mut table = [NOT_A_DIGIT; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Return the symbol for a digit value.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidDigitValue`] if `value` is outside `[0, 61]`.
pub fn symbol_of(value: u32) -> NumeralResult<char> {
    ALPHABET
        .get(value as usize)
        .map(|&b| char::from(b))
        .ok_or(NumeralError::InvalidDigitValue(value))
}

/// Return the digit value of a symbol (case-sensitive).
///
/// # Errors
///
/// Returns [`NumeralError::InvalidDigitSymbol`] if `symbol` is not in the alphabet.
pub fn value_of(symbol: char) -> NumeralResult<u32> {
    if !symbol.is_ascii() {
        return Err(NumeralError::InvalidDigitSymbol(symbol));
    }
    match VALUES[symbol as usize] {
        NOT_A_DIGIT => Err(NumeralError::InvalidDigitSymbol(symbol)),
        value => Ok(u32::from(value)),
    }
}
