use thiserror::Error;

/// Failure modes of [`crate::cracker::Cracker::solve`] and the prediction
/// accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrackError {
    #[error("failed to allocate the {n}x{n} transition matrix")]
    Allocation { n: usize },

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("observations are inconsistent with any MT19937 seed (rank {rank})")]
    Inconsistent { rank: usize },

    #[error("underdetermined system: rank {rank}, need {required}")]
    Underdetermined { rank: usize, required: usize },

    #[error("state not recovered yet; call solve() first")]
    NotArmed,
}

/// The two ways a `solve` call's inputs can be malformed before elimination
/// ever runs: a mis-sized observation vector, or a granularity outside the
/// closed set `{2,4,8,16,32}`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("observation length {got} does not match the expected {expected}")]
    ObservationLength { expected: usize, got: usize },

    #[error("granularity must be one of {{2, 4, 8, 16, 32}}, got {requested}")]
    InvalidGranularity { requested: u32 },
}
