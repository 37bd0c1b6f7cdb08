//! Gaussian elimination, consistency checking, and back-substitution over
//! GF(2).
//!
//! The kernel of the MT19937 transition map is the low 31 bits of
//! `state[0]` (the twist immediately discards them under `UPPER_MASK`), so a
//! fully-determined system has rank exactly `n - 31`.

use crate::bitmatrix::BitMatrix;
use crate::error::CrackError;
use crate::transition::N;

/// `n - 31`: the rank a fully-determined observation set must reach.
pub const REQUIRED_RANK: usize = N - 31;

/// Result of Gauss-Jordan elimination: the number of pivots found, and for
/// each pivot row (indices `0..rank`) the column its leading 1 sits in.
pub struct Elimination {
    pub rank: usize,
    pivot_col: Vec<usize>,
}

/// Run full Gauss-Jordan elimination on `bm` in place, carrying `observation`
/// along as the augmented column. Every pivot column ends up with exactly
/// one 1, in its pivot row, across the *entire* matrix (not just below the
/// pivot), which is what lets `back_substitute` read off `x` directly.
pub fn eliminate(bm: &mut BitMatrix, observation: &mut [bool]) -> Elimination {
    let n = bm.n();
    let mut current_row = 0usize;
    let mut pivot_col = Vec::with_capacity(n);

    for col in 0..n {
        let pivot_row = (current_row..n).find(|&r| bm.get(r, col));
        let Some(pivot_row) = pivot_row else {
            continue;
        };

        bm.swap_row(current_row, pivot_row);
        observation.swap(current_row, pivot_row);
        pivot_col.push(col);

        for row in 0..n {
            if row != current_row && bm.get(row, col) {
                bm.xor_row(row, current_row);
                observation[row] ^= observation[current_row];
            }
        }
        current_row += 1;
    }

    Elimination {
        rank: current_row,
        pivot_col,
    }
}

/// Check that every row at or beyond the rank is satisfied (all-zero
/// observation), and that the rank matches the one fully-determined system
/// this construction can ever reach.
pub fn check_consistency(
    elimination: &Elimination,
    observation: &[bool],
) -> Result<(), CrackError> {
    for row in elimination.rank..observation.len() {
        if observation[row] {
            return Err(CrackError::Inconsistent {
                rank: elimination.rank,
            });
        }
    }
    if elimination.rank != REQUIRED_RANK {
        return Err(CrackError::Underdetermined {
            rank: elimination.rank,
            required: REQUIRED_RANK,
        });
    }
    Ok(())
}

/// Back-substitute the reduced system into the n-bit unknown vector `x`.
/// Non-pivot (free) columns are left at their default `false`, the
/// canonical representative of the 31-dimensional kernel.
pub fn back_substitute(bm: &BitMatrix, elimination: &Elimination, observation: &[bool]) -> Vec<bool> {
    let n = bm.n();
    let mut x = vec![false; n];

    for i in (0..elimination.rank).rev() {
        let col = elimination.pivot_col[i];
        let mut sum = observation[i];
        for j in (col + 1)..n {
            if bm.get(i, j) {
                sum ^= x[j];
            }
        }
        x[col] = sum;
    }

    x
}
