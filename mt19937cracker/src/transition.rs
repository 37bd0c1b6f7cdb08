//! Builds the GF(2) transition matrix that maps MT19937 state bits to
//! observed output bits.
//!
//! For each of the n seed-state bits, a fresh engine is seeded with only
//! that bit set, and the bits it flips in the observation stream are
//! recorded. Row i, column j of the resulting matrix is the coefficient of
//! seed bit j in observed bit i.

use crate::bitmatrix::BitMatrix;
use crate::granularity::Granularity;
use crate::mt19937::{Engine, N as STATE_WORDS};

/// Number of rows/columns of the transition matrix: `624 * 32`.
pub const N: usize = STATE_WORDS * 32;

/// Populate an n×n `BitMatrix` as the GF(2) transition matrix for the given
/// granularity. `bm` must already be `N`×`N` and all-zero (as returned by
/// `BitMatrix::new`/`try_new`).
///
/// Full-word mode (`Granularity::ThirtyTwo`) observes only the MSB of each
/// extract — one row per extract — not all 32 bits of it; every other
/// granularity observes its top `k` bits as `k` consecutive rows per
/// extract. See [`Granularity::observed_bits_per_extract`].
pub fn build(bm: &mut BitMatrix, granularity: Granularity) {
    let k = granularity.observed_bits_per_extract();

    for j in 0..N {
        let word_idx = j / 32;
        let bit_pos = (j % 32) as u32;
        let mut engine = Engine::from_unit_state(word_idx, bit_pos);

        let mut row = 0usize;
        'outputs: loop {
            let y = engine.extract();
            for b in 0..k {
                if row >= N {
                    break 'outputs;
                }
                // Observed bits are harvested MSB-first: bit b of the
                // extract is bit (31 - b).
                let bit = (y >> (31 - b)) & 1 != 0;
                if bit {
                    bm.set(row, j, true);
                }
                row += 1;
            }
        }
    }
}
