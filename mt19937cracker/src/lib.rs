//! Recovers an MT19937 Mersenne Twister generator's internal state from a
//! stream of truncated outputs, then predicts the outputs that follow.
//!
//! The entry point is [`Cracker`]: feed it `19,968` GF(2) observation bits
//! (harvested from successive tempered outputs, [`Granularity::observed_bits_per_extract`]
//! high bits per extract) and a [`Granularity`], and it solves the
//! underlying sparse linear system over GF(2), reconstructs the victim's
//! pre-twist seed, and arms an internal engine aligned just past the
//! observed outputs.
//!
//! ```
//! use mt19937cracker::{Cracker, Granularity, Mt19937, OBSERVATION_LEN};
//!
//! // Simulate observing a victim generator's full-word-mode outputs: at
//! // this granularity only the MSB of each extract is observed, so one
//! // extract produces one observation bit.
//! let seed_state = {
//!     let mut s = [0u32; 624];
//!     for (i, w) in s.iter_mut().enumerate() {
//!         *w = (i as u32).wrapping_mul(2654435761).wrapping_add(1);
//!     }
//!     s
//! };
//! let mut victim = Mt19937::from_state(seed_state);
//! let mut observations = Vec::with_capacity(OBSERVATION_LEN);
//! while observations.len() < OBSERVATION_LEN {
//!     let y = victim.extract();
//!     observations.push((y >> 31) & 1 != 0);
//! }
//!
//! let mut cracker = Cracker::new();
//! cracker.solve(&observations, Granularity::ThirtyTwo).unwrap();
//! assert_eq!(cracker.next_u32().unwrap(), victim.extract());
//! ```

pub mod bitmatrix;
pub mod cracker;
pub mod error;
pub mod granularity;
pub mod mt19937;
pub mod reconstruct;
pub mod solver;
pub mod transition;

pub use cracker::Cracker;
pub use error::{CrackError, ShapeError};
pub use granularity::Granularity;
pub use mt19937::Engine as Mt19937;
pub use transition::N as OBSERVATION_LEN;
