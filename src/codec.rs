use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::NumeralResult;
use crate::radix::Radix;

/// Input accepted by [`Codec::decode`] and the arithmetic operators.
///
/// Decimal values pass through decoding unchanged; numerals are decoded in
/// the codec's radix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Decimal(f64),
    Numeral(&'a str),
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Self::Decimal(f64::from(value))
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(numeral: &'a str) -> Self {
        Self::Numeral(numeral)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(numeral: &'a String) -> Self {
        Self::Numeral(numeral)
    }
}

/// Encoder/decoder for one radix.
///
/// A codec is an immutable value: build it once per radix and share it freely
/// across threads. The variant (positive or negative radix) is fixed by the
/// [`Radix`] it was built from.
///
/// ```rust
/// use basenum::Codec;
///
/// let hex = Codec::new(16).unwrap();
/// assert_eq!(hex.encode(255.0).unwrap(), "ff");
/// assert_eq!(hex.decode("ff").unwrap(), 255.0);
///
/// let negabinary = Codec::new(-2).unwrap();
/// assert_eq!(negabinary.encode(5.0).unwrap(), "101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codec {
    radix: Radix,
    precision: usize,
}

impl Codec {
    /// Fractional digits produced by [`encode`](Self::encode) unless overridden
    pub const DEFAULT_PRECISION: usize = 10;

    /// Build a codec for a signed radix.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidRadix`](crate::NumeralError::InvalidRadix)
    /// for 0, 1, -1 and magnitudes above 62.
    pub fn new(radix: i32) -> NumeralResult<Self> {
        let radix = Radix::new(radix).inspect_err(|e| tracing::debug!("{e}"))?;
        Ok(Self::from_radix(radix))
    }

    #[must_use]
    pub const fn from_radix(radix: Radix) -> Self {
        Self {
            radix,
            precision: Self::DEFAULT_PRECISION,
        }
    }

    /// Replace the default fractional precision
    #[must_use]
    pub const fn with_precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }

    #[must_use]
    pub const fn radix(&self) -> Radix {
        self.radix
    }

    #[must_use]
    pub const fn precision(&self) -> usize {
        self.precision
    }

    /// Decode a numeral (or pass a decimal through) to a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidDigitSymbol`](crate::NumeralError::InvalidDigitSymbol)
    /// if the numeral contains a character outside the digit alphabet.
    pub fn decode<'a>(&self, input: impl Into<Operand<'a>>) -> NumeralResult<f64> {
        match input.into() {
            Operand::Decimal(value) => Ok(value),
            Operand::Numeral(numeral) => decode(numeral, self.radix),
        }
    }

    /// Encode a value with the codec's default precision.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::NonFiniteValue`](crate::NumeralError::NonFiniteValue)
    /// for NaN and infinities.
    pub fn encode(&self, value: f64) -> NumeralResult<String> {
        encode(value, self.radix, self.precision)
    }

    /// Encode a value with at most `precision` fractional digits.
    ///
    /// # Errors
    ///
    /// Same as [`encode`](Self::encode).
    pub fn encode_with_precision(&self, value: f64, precision: usize) -> NumeralResult<String> {
        encode(value, self.radix, precision)
    }
}

impl TryFrom<i32> for Codec {
    type Error = crate::error::NumeralError;

    fn try_from(radix: i32) -> Result<Self, Self::Error> {
        Self::new(radix)
    }
}

impl From<Radix> for Codec {
    fn from(radix: Radix) -> Self {
        Self::from_radix(radix)
    }
}

/// Build the codec variant matching the sign of `radix`.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidRadix`](crate::NumeralError::InvalidRadix)
/// for 0, 1, -1 and magnitudes above 62.
pub fn make_codec(radix: i32) -> NumeralResult<Codec> {
    Codec::new(radix)
}
