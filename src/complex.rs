//! A minimal complex-number helper, enough to express imaginary roots.

use crate::error::{NumeralError, NumeralResult};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Complex number `re + im·I`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Division; fails when `rhs` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::DivisionByZero`] if both parts of `rhs` are zero.
    pub fn checked_div(self, rhs: impl Into<Self>) -> NumeralResult<Self> {
        let rhs = rhs.into();
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        if denom == 0.0 {
            return Err(NumeralError::DivisionByZero);
        }
        Ok(Self {
            re: (self.re * rhs.re + self.im * rhs.im) / denom,
            im: (self.im * rhs.re - self.re * rhs.im) / denom,
        })
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

impl From<[f64; 2]> for Complex {
    fn from([re, im]: [f64; 2]) -> Self {
        Self { re, im }
    }
}

impl<T: Into<Complex>> Add<T> for Complex {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        let rhs = rhs.into();
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Into<Complex>> Sub<T> for Complex {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        let rhs = rhs.into();
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Into<Complex>> Mul<T> for Complex {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let rhs = rhs.into();
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == 0.0 {
            return write!(f, "{}", self.re);
        }
        if self.re == 0.0 {
            return write!(f, "{}I", self.im);
        }
        let sign = if self.im >= 0.0 { '+' } else { '-' };
        write!(f, "{} {sign} {}I", self.re, self.im.abs())
    }
}

/// The `degree`-th root of `x`.
///
/// A negative radicand has a real root when `degree` is an odd integer.
/// Any other degree gives the purely imaginary `|x|^(1/degree)·I`, which is
/// the principal root only for degree 2.
#[must_use]
pub fn root(x: f64, degree: f64) -> Complex {
    let magnitude = x.abs().powf(degree.recip());
    if x < 0.0 && is_odd_integer(degree) {
        Complex::from(-magnitude)
    } else if x < 0.0 {
        Complex::new(0.0, magnitude)
    } else {
        Complex::from(magnitude)
    }
}

fn is_odd_integer(n: f64) -> bool {
    n.fract() == 0.0 && n % 2.0 != 0.0
}
