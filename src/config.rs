use crate::codec::Codec;
use crate::error::NumeralResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unvalidated codec settings, e.g. loaded from a configuration file.
///
/// Missing fields fall back to radix 10 and [`Codec::DEFAULT_PRECISION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// Signed radix; valid values are `2..=62` and `-62..=-2`
    pub radix: i32,

    /// Fractional digits produced when encoding
    pub precision: usize,
}

impl CodecConfig {
    #[must_use]
    pub const fn new(radix: i32) -> Self {
        Self {
            radix,
            precision: Codec::DEFAULT_PRECISION,
        }
    }

    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Validate the settings and build the codec.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidRadix`](crate::NumeralError::InvalidRadix)
    /// if `radix` is not a valid radix.
    pub fn build(&self) -> NumeralResult<Codec> {
        Ok(Codec::new(self.radix)?.with_precision(self.precision))
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

impl From<Codec> for CodecConfig {
    fn from(codec: Codec) -> Self {
        Self {
            radix: codec.radix().value(),
            precision: codec.precision(),
        }
    }
}
