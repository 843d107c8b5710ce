use crate::alphabet::MAX_RADIX;
use crate::error::{NumeralError, NumeralResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest radix magnitude for which decoding ignores letter case
const CASE_INSENSITIVE_LIMIT: u32 = 36;

/// A validated radix, split by sign into the two supported number systems.
///
/// Both variants carry the radix *magnitude*, always in `2..=62`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub enum Radix {
    /// Standard positional notation, radix > 1
    Positive(u32),
    /// Negative-radix notation, radix < -1
    Negative(u32),
}

impl Radix {
    /// Validate a signed radix.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidRadix`] for 0, 1, -1 and any radix whose
    /// magnitude exceeds 62.
    pub fn new(radix: i32) -> NumeralResult<Self> {
        let magnitude = radix.unsigned_abs();
        if !(2..=MAX_RADIX).contains(&magnitude) {
            return Err(NumeralError::InvalidRadix(radix));
        }
        if radix > 0 {
            Ok(Self::Positive(magnitude))
        } else {
            Ok(Self::Negative(magnitude))
        }
    }

    /// The signed radix
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn value(self) -> i32 {
        match self {
            Self::Positive(m) => m as i32,
            Self::Negative(m) => -(m as i32),
        }
    }

    /// The radix magnitude `b = |radix|`
    #[must_use]
    pub const fn magnitude(self) -> u32 {
        match self {
            Self::Positive(m) | Self::Negative(m) => m,
        }
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative(_))
    }

    /// Whether numerals in this radix are read without regard to letter case.
    ///
    /// Up to magnitude 36 every digit has a lower-case symbol, so upper-case
    /// letters are folded onto 10-35. Above that, case selects the digit.
    #[must_use]
    pub const fn is_case_insensitive(self) -> bool {
        self.magnitude() <= CASE_INSENSITIVE_LIMIT
    }
}

impl TryFrom<i32> for Radix {
    type Error = NumeralError;

    fn try_from(radix: i32) -> Result<Self, Self::Error> {
        Self::new(radix)
    }
}

impl From<Radix> for i32 {
    fn from(radix: Radix) -> Self {
        radix.value()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
