//! Drawing the next word and the prompt direction.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::model::Direction;
use crate::weights::Distribution;

/// Pick the index selected by a uniform draw `t` in `[0, 1)`.
///
/// Returns the smallest `i` whose cumulative probability exceeds `t`. When
/// rounding leaves the total slightly below 1 and no such `i` exists, the last
/// index is returned.
pub fn sample_index_with(distribution: &Distribution, t: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, p) in distribution.probabilities().iter().enumerate() {
        cumulative += p;
        if cumulative > t {
            return i;
        }
    }
    distribution.len().saturating_sub(1)
}

/// Random source for word and direction draws.
///
/// Each sampler owns its own stream, so independent samplers never share state.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Create a sampler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a sampler with a specific seed (for testing and reproducible runs).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one index with probability `distribution[index]`.
    pub fn sample_index(&mut self, distribution: &Distribution) -> usize {
        let t: f64 = self.rng.gen();
        sample_index_with(distribution, t)
    }

    /// Draw which language is shown, each with probability 1/2.
    pub fn sample_direction(&mut self) -> Direction {
        if self.rng.gen_bool(0.5) {
            Direction::A
        } else {
            Direction::B
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}
