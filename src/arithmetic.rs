//! Arithmetic on numerals by decimal round-trip: decode both operands, compute
//! in `f64`, encode the result with the codec's default precision.

use crate::codec::{Codec, Operand};
use crate::error::{NumeralError, NumeralResult};

/// Binary operators exposed on [`Codec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    Pow,
}

impl Operator {
    /// Operator names as accepted by [`FromStr`](std::str::FromStr)
    pub const NAMES: [&'static str; 5] = ["plus", "minus", "times", "divide", "pow"];

    fn apply(self, x: f64, y: f64) -> NumeralResult<f64> {
        match self {
            Self::Plus => Ok(x + y),
            Self::Minus => Ok(x - y),
            Self::Times => Ok(x * y),
            Self::Divide if y == 0.0 => Err(NumeralError::DivisionByZero),
            Self::Divide => Ok(x / y),
            Self::Pow => Ok(x.powf(y)),
        }
    }
}

impl std::str::FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" => Ok(Self::Plus),
            "minus" => Ok(Self::Minus),
            "times" => Ok(Self::Times),
            "divide" => Ok(Self::Divide),
            "pow" => Ok(Self::Pow),
            other => Err(format!("unknown operator: {other}")),
        }
    }
}

impl Codec {
    /// Decode both operands, apply `op` and encode the result.
    ///
    /// # Errors
    ///
    /// Propagates decode errors for either operand, returns
    /// [`NumeralError::DivisionByZero`] for a zero divisor and
    /// [`NumeralError::NonFiniteValue`] when the result is NaN or infinite.
    pub fn apply<'a, 'b>(
        &self,
        op: Operator,
        x: impl Into<Operand<'a>>,
        y: impl Into<Operand<'b>>,
    ) -> NumeralResult<String> {
        let x = self.decode(x)?;
        let y = self.decode(y)?;
        let result = op.apply(x, y).inspect_err(|e| {
            tracing::debug!(radix = %self.radix(), ?op, x, y, "{e}");
        })?;
        tracing::trace!(radix = %self.radix(), ?op, x, y, result, "evaluated");
        self.encode(result)
    }

    /// `x + y`
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn plus<'a, 'b>(
        &self,
        x: impl Into<Operand<'a>>,
        y: impl Into<Operand<'b>>,
    ) -> NumeralResult<String> {
        self.apply(Operator::Plus, x, y)
    }

    /// `x - y`
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn minus<'a, 'b>(
        &self,
        x: impl Into<Operand<'a>>,
        y: impl Into<Operand<'b>>,
    ) -> NumeralResult<String> {
        self.apply(Operator::Minus, x, y)
    }

    /// `x * y`
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn times<'a, 'b>(
        &self,
        x: impl Into<Operand<'a>>,
        y: impl Into<Operand<'b>>,
    ) -> NumeralResult<String> {
        self.apply(Operator::Times, x, y)
    }

    /// `x / y`
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::DivisionByZero`] when `y` decodes to zero.
    pub fn divide<'a, 'b>(
        &self,
        x: impl Into<Operand<'a>>,
        y: impl Into<Operand<'b>>,
    ) -> NumeralResult<String> {
        self.apply(Operator::Divide, x, y)
    }

    /// `x` raised to `y`
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn pow<'a, 'b>(
        &self,
        x: impl Into<Operand<'a>>,
        y: impl Into<Operand<'b>>,
    ) -> NumeralResult<String> {
        self.apply(Operator::Pow, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::make_codec;

    #[test]
    fn test_plus_hex() {
        let hex = make_codec(16).unwrap();
        assert_eq!(hex.plus("ff", "1").unwrap(), "100");
    }

    #[test]
    fn test_mixed_operands() {
        let bin = make_codec(2).unwrap();
        assert_eq!(bin.plus("101", 3).unwrap(), "1000");
        assert_eq!(bin.minus(1.5, "1").unwrap(), "0.1");
        assert_eq!(bin.times("11", "11").unwrap(), "1001");
    }

    #[test]
    fn test_divide() {
        let dec = make_codec(10).unwrap();
        assert_eq!(dec.divide("9", "4").unwrap(), "2.25");
        assert_eq!(dec.divide("1", "3").unwrap(), "0.3333333333");
    }

    #[test]
    fn test_divide_by_zero() {
        for radix in [2, 10, 62, -2, -62] {
            let codec = make_codec(radix).unwrap();
            assert_eq!(codec.divide("1", "0"), Err(NumeralError::DivisionByZero));
            assert_eq!(codec.divide(5.0, 0.0), Err(NumeralError::DivisionByZero));
        }
    }

    #[test]
    fn test_pow() {
        let oct = make_codec(8).unwrap();
        assert_eq!(oct.pow("2", "10").unwrap(), "400");
    }

    #[test]
    fn test_negative_radix_arithmetic() {
        let negabinary = make_codec(-2).unwrap();
        // 5 - 6 = -1
        assert_eq!(negabinary.minus("101", "11010").unwrap(), "11");
    }

    #[test]
    fn test_result_uses_codec_precision() {
        let dec = make_codec(10).unwrap().with_precision(2);
        assert_eq!(dec.divide("2", "3").unwrap(), "0.66");
    }

    #[test]
    fn test_invalid_operand_propagates() {
        let dec = make_codec(10).unwrap();
        assert_eq!(dec.plus("1", "x!"), Err(NumeralError::InvalidDigitSymbol('!')));
    }

    #[test]
    fn test_non_finite_result() {
        let dec = make_codec(10).unwrap();
        assert!(matches!(
            dec.pow("-8", 0.5),
            Err(NumeralError::NonFiniteValue(_))
        ));
    }

    #[test]
    fn test_operator_from_str() {
        for name in Operator::NAMES {
            assert!(name.parse::<Operator>().is_ok());
        }
        assert!("modulo".parse::<Operator>().is_err());
    }
}
