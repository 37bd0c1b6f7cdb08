//! The top-level recovery facade.
//!
//! Orchestrates bit-matrix allocation, transition-matrix construction,
//! Gaussian elimination, and state reconstruction into a single `solve`
//! call, then exposes prediction through an internal engine. The transition
//! matrix is scoped to a single `solve` call and dropped once the state is
//! recovered, rather than kept alive for the life of the cracker.

use tracing::instrument;

use crate::bitmatrix::BitMatrix;
use crate::error::{CrackError, ShapeError};
use crate::granularity::Granularity;
use crate::mt19937::{Engine, N as STATE_WORDS};
use crate::reconstruct::{fast_forward, pack_state};
use crate::solver::{back_substitute, check_consistency, eliminate};
use crate::transition::{self, N};

/// Recovers an MT19937 generator's internal state from a stream of
/// truncated observations, then predicts the outputs that follow.
///
/// A freshly constructed `Cracker` is unarmed: [`Self::next_u32`] and
/// [`Self::state`] fail with [`CrackError::NotArmed`] until [`Self::solve`]
/// succeeds. `solve` runs at most once productively per instance — on
/// success the cracker stays armed forever; on failure it stays unarmed and
/// can be retried with different observations.
pub struct Cracker {
    engine: Option<Engine>,
    state: Option<[u32; STATE_WORDS]>,
}

impl Default for Cracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Cracker {
    /// Construct an unarmed cracker. Never fails: the only allocation large
    /// enough to plausibly fail (the n×n transition matrix) is scoped to
    /// `solve`, not to construction.
    pub fn new() -> Self {
        Self {
            engine: None,
            state: None,
        }
    }

    /// Whether a previous `solve` call succeeded.
    pub fn is_armed(&self) -> bool {
        self.state.is_some()
    }

    /// Recover the generator state from `observations`, a sequence of
    /// exactly [`transition::N`] (19,968) GF(2) values — the top
    /// [`Granularity::observed_bits_per_extract`] bits of each successive
    /// tempered output, MSB-first within each 32-bit word. Full-word mode
    /// (`Granularity::ThirtyTwo`) is a special case that observes only the
    /// MSB of each extract, one observation per extract.
    ///
    /// On success the cracker is armed and `self.state()` returns the
    /// reconstructed pre-twist seed. On failure the cracker is left
    /// unarmed; the caller may call `solve` again with different
    /// observations.
    #[instrument(skip_all, fields(n = observations.len(), k = granularity.bits()))]
    pub fn solve(
        &mut self,
        observations: &[bool],
        granularity: Granularity,
    ) -> Result<(), CrackError> {
        if observations.len() != N {
            return Err(CrackError::Shape(ShapeError::ObservationLength {
                expected: N,
                got: observations.len(),
            }));
        }

        tracing::debug!("building transition matrix");
        let mut bm = BitMatrix::try_new(N).ok_or(CrackError::Allocation { n: N })?;
        transition::build(&mut bm, granularity);

        let mut observation = observations.to_vec();

        tracing::debug!("running Gauss-Jordan elimination");
        let elimination = eliminate(&mut bm, &mut observation);
        tracing::info!(rank = elimination.rank, "elimination complete");

        check_consistency(&elimination, &observation)?;

        tracing::debug!("back-substituting");
        let x = back_substitute(&bm, &elimination, &observation);
        drop(bm);

        tracing::debug!("reconstructing state and fast-forwarding");
        let state = pack_state(&x);
        let engine = fast_forward(state, granularity, N);

        self.state = Some(state);
        self.engine = Some(engine);
        Ok(())
    }

    /// The next 32-bit output the victim generator would have produced.
    /// Each call advances the internal engine exactly once.
    pub fn next_u32(&mut self) -> Result<u32, CrackError> {
        self.engine
            .as_mut()
            .map(Engine::extract)
            .ok_or(CrackError::NotArmed)
    }

    /// The reconstructed 624-word pre-twist state (the recovered seed).
    ///
    /// The low 31 bits of `state[0]` are always 0: they are the unobservable
    /// kernel of the MT19937 output map, and back-substitution pins free
    /// variables to 0.
    pub fn state(&self) -> Result<[u32; STATE_WORDS], CrackError> {
        self.state.ok_or(CrackError::NotArmed)
    }
}
