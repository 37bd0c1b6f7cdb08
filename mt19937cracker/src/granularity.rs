//! Observation granularity `k`: how many high bits of each tempered output
//! are treated as observed.
//!
//! Rather than accepting an arbitrary bit count and silently clamping it
//! into range, `Granularity` is a closed enum: it can only be built from one
//! of the values the solver actually supports.

use crate::error::ShapeError;

/// Number of high bits of each tempered MT19937 output that are treated as
/// one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Granularity {
    Two,
    Four,
    Eight,
    Sixteen,
    ThirtyTwo,
}

impl Granularity {
    /// Build a `Granularity` from a bit count, accepting exactly
    /// `{2, 4, 8, 16, 32}`. Any other value is a caller error, not a value
    /// to be silently reinterpreted.
    pub fn from_bits(requested: u32) -> Result<Self, ShapeError> {
        match requested {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            32 => Ok(Self::ThirtyTwo),
            _ => Err(ShapeError::InvalidGranularity { requested }),
        }
    }

    /// Number of high bits consumed per 32-bit extract, for every
    /// granularity *except* [`Self::ThirtyTwo`]. `ThirtyTwo` is "full-word
    /// mode": only the single MSB of each extract is observed, one row per
    /// extract, not 32 rows per extract — see [`Self::observed_bits_per_extract`].
    pub fn bits(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
            Self::Sixteen => 16,
            Self::ThirtyTwo => 32,
        }
    }

    /// Number of observation bits actually harvested from a single extract.
    ///
    /// For `{Two, Four, Eight, Sixteen}` this is `bits()`: the top `k` bits
    /// of the extract become `k` consecutive rows. `ThirtyTwo` is special:
    /// it names "full-word mode", in which only the extract's MSB is
    /// observed (one row per extract), not all 32 of its bits — matching
    /// the worked examples of the system this crate implements, where 624
    /// raw extracts at full-word granularity yield exactly 624 observation
    /// bits, and the full `n = 19,968`-bit system requires 19,968 raw
    /// extracts.
    pub fn observed_bits_per_extract(self) -> usize {
        match self {
            Self::ThirtyTwo => 1,
            other => other.bits() as usize,
        }
    }

    /// Number of MT19937 extracts needed to produce `n` observation bits at
    /// this granularity: `ceil(n / observed_bits_per_extract())`.
    pub fn steps_for(self, n: usize) -> usize {
        let k = self.observed_bits_per_extract();
        (n + k - 1) / k
    }
}
