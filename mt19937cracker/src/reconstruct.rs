//! Packs a solved unknown vector back into an MT19937 state, and fast-forwards
//! an engine past the outputs that were already observed.

use crate::granularity::Granularity;
use crate::mt19937::{Engine, N as STATE_WORDS};

/// Pack the solved n-bit unknown vector into a 624-word MT19937 state:
/// bit `j` of `x` becomes bit `j % 32` of word `j / 32`.
pub fn pack_state(x: &[bool]) -> [u32; STATE_WORDS] {
    let mut state = [0u32; STATE_WORDS];
    for (j, &bit) in x.iter().enumerate() {
        if bit {
            state[j / 32] |= 1u32 << (j % 32);
        }
    }
    state
}

/// Seed an engine from the reconstructed state and discard the outputs that
/// produced the observations, leaving it ready to emit the first unseen
/// output.
pub fn fast_forward(state: [u32; STATE_WORDS], granularity: Granularity, n: usize) -> Engine {
    let steps = granularity.steps_for(n);
    let mut engine = Engine::from_state(state);
    engine.discard(steps);
    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::N;

    #[test]
    fn pack_state_round_trips_bits() {
        let mut x = vec![false; N];
        x[0] = true;
        x[31] = true;
        x[32] = true;
        x[63] = true;
        let state = pack_state(&x);
        assert_eq!(state[0], (1u32 << 0) | (1u32 << 31));
        assert_eq!(state[1], (1u32 << 0) | (1u32 << 31));
        for (i, &word) in state.iter().enumerate() {
            if i > 1 {
                assert_eq!(word, 0);
            }
        }
    }

    #[test]
    fn fast_forward_consumes_exactly_steps_outputs() {
        let mut state = [0u32; crate::mt19937::N];
        for (i, w) in state.iter_mut().enumerate() {
            *w = (i as u32).wrapping_mul(2_246_822_519).wrapping_add(1);
        }

        // Four bits observed per extract: N / 4 = 4,992 extracts consumed.
        let mut reference = Engine::from_state(state);
        for _ in 0..4_992 {
            reference.extract();
        }
        let expected_next = reference.extract();

        let mut fast_forwarded = fast_forward(state, crate::granularity::Granularity::Four, N);
        assert_eq!(fast_forwarded.extract(), expected_next);
    }

    #[test]
    fn fast_forward_full_word_mode_consumes_n_outputs() {
        let mut state = [0u32; crate::mt19937::N];
        for (i, w) in state.iter_mut().enumerate() {
            *w = (i as u32).wrapping_mul(2_246_822_519).wrapping_add(1);
        }

        // Full-word mode observes one bit per extract: N extracts consumed,
        // not N / 32.
        let mut reference = Engine::from_state(state);
        for _ in 0..N {
            reference.extract();
        }
        let expected_next = reference.extract();

        let mut fast_forwarded = fast_forward(state, crate::granularity::Granularity::ThirtyTwo, N);
        assert_eq!(fast_forwarded.extract(), expected_next);
    }
}
