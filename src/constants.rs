//! Named mathematical constants and the sequences used to derive some of them.
//!
//! The table is built once by [`init_constants`] and is read-only afterwards.

use crate::codec::Codec;
use crate::error::NumeralResult;
use std::collections::{BTreeMap, VecDeque};
use std::f64::consts;

/// Default convergence tolerance for [`nbonacci_ratio`]
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// Default iteration cap for [`nbonacci_ratio`]
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Name → value table of mathematical constants
#[derive(Debug, Clone, PartialEq)]
pub struct Constants {
    values: BTreeMap<&'static str, f64>,
}

impl Constants {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Constant names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().map(|(&name, &value)| (name, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build the constant table.
///
/// Call once during start-up and pass the result around; nothing is cached
/// globally.
///
/// # Errors
///
/// Propagates codec errors from deriving the Champernowne constant.
pub fn init_constants() -> NumeralResult<Constants> {
    let phi = metallic_mean(1);
    let champernowne = Codec::new(10)?.decode(champernowne(10, 102, 200)?.as_str())?;

    let values: BTreeMap<&'static str, f64> = [
        ("INF", f64::INFINITY),
        ("NEG_INF", f64::NEG_INFINITY),
        ("EPS", 1e-20),
        ("NEG_EPS", -1e-20),
        ("PI", consts::PI),
        ("TAU", consts::TAU),
        ("EULER", consts::E),
        ("PHI", phi),
        ("PHI_CONJUGATE", -(phi - 1.0)),
        ("DELTA2", metallic_mean(2)),
        ("DELTA3", metallic_mean(3)),
        ("CHAMPERNOWNE", champernowne),
        ("CATALAN", 0.915_965_594_177_219),
        ("ZETA2", 1.644_934_066_848_226_4),
        ("ZETA4", 1.082_323_233_711_138),
        ("GLAISHER", 1.282_427_129_100_622_6),
        ("KAPREKAR", 6174.0),
        ("EULER_MASCHERONI", 0.577_215_664_901_532_9),
        ("SQRT_2", consts::SQRT_2),
        ("SQRT_3", 1.732_050_807_568_877_2),
        ("RADIANS", consts::TAU),
        ("DEGREES", 360.0),
        ("GRADIANS", 400.0),
        ("APERY", 1.202_056_903_159_594_2),
        ("SQRT_5", 2.236_067_977_499_79),
        ("LEMNISCATE", 2.622_057_554_292_119),
    ]
    .into_iter()
    .collect();

    tracing::debug!(count = values.len(), "constant table initialised");
    Ok(Constants { values })
}

/// The `n`-th metallic mean `(n + sqrt(n² + 4)) / 2`; `n = 1` is the golden ratio
#[must_use]
pub fn metallic_mean(n: u32) -> f64 {
    let n = f64::from(n);
    (n + (n * n + 4.0).sqrt()) / 2.0
}

/// Limiting ratio of consecutive terms of the `n`-step Fibonacci sequence.
///
/// Iterates until two successive ratios differ by less than `tolerance` or
/// `max_iter` terms have been generated. Returns `None` for `n == 0` or
/// `max_iter == 0`.
#[must_use]
pub fn nbonacci_ratio(n: usize, tolerance: f64, max_iter: usize) -> Option<f64> {
    if n == 0 {
        return None;
    }

    let mut window: VecDeque<f64> = std::iter::repeat(1.0).take(n).collect();
    let mut ratio = f64::NAN;
    for _ in 0..max_iter {
        let next: f64 = window.iter().sum();
        let next_ratio = next / window.back()?;
        if (next_ratio - ratio).abs() < tolerance {
            return Some(next_ratio);
        }
        ratio = next_ratio;
        window.pop_front();
        window.push_back(next);
    }
    (!ratio.is_nan()).then_some(ratio)
}

/// Champernowne numeral in `radix`: `0.` followed by the first `precision`
/// digits of `1 2 3 … terms` written in that radix.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidRadix`](crate::NumeralError::InvalidRadix)
/// for an invalid radix.
pub fn champernowne(radix: i32, terms: u32, precision: usize) -> NumeralResult<String> {
    let codec = Codec::new(radix)?;
    let mut digits = String::new();
    for i in 1..=terms {
        digits.push_str(&codec.encode_with_precision(f64::from(i), 0)?);
    }
    digits.truncate(precision);
    Ok(format!("0.{digits}"))
}
