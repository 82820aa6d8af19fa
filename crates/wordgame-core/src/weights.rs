//! Adaptive word weighting.
//!
//! Every word starts at its base frequency. Replaying the history multiplies a
//! word's weight by `1 - decay` for each correct answer and by `1 + decay` for
//! each incorrect one; the weights are then normalized into a probability
//! distribution. The result depends only on (lexicon, history, decay).

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordGameError};
use crate::lexicon::Lexicon;
use crate::model::AnswerEvent;

/// Strength of the multiplicative update, restricted to the open interval (0, 1).
///
/// At `decay == 1` a single correct answer would zero a weight, and above it the
/// weight would turn negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Decay(f64);

impl Decay {
    pub const DEFAULT: Decay = Decay(0.1);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 && value < 1.0 {
            Ok(Decay(value))
        } else {
            Err(WordGameError::InvalidDecay(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Factor applied to a word's weight after one answer.
    pub fn factor(self, correct: bool) -> f64 {
        if correct {
            1.0 - self.0
        } else {
            1.0 + self.0
        }
    }
}

impl Default for Decay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Decay {
    type Error = WordGameError;

    fn try_from(value: f64) -> Result<Self> {
        Decay::new(value)
    }
}

impl From<Decay> for f64 {
    fn from(decay: Decay) -> f64 {
        decay.0
    }
}

/// A normalized probability distribution over the lexicon, index-aligned with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    probs: Vec<f64>,
}

impl Distribution {
    /// Normalize non-negative weights into a distribution.
    pub fn from_weights(weights: Vec<f64>) -> Result<Self> {
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(WordGameError::ZeroMass);
        }
        let mass: f64 = weights.iter().sum();
        if !mass.is_finite() || mass <= 0.0 {
            return Err(WordGameError::ZeroMass);
        }
        let probs = weights.into_iter().map(|w| w / mass).collect();
        Ok(Self { probs })
    }

    /// All mass on index `k` of `n`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= n`.
    pub fn one_hot(n: usize, k: usize) -> Self {
        assert!(k < n, "one-hot index {k} out of range for {n} elements");
        let mut probs = vec![0.0; n];
        probs[k] = 1.0;
        Self { probs }
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probs
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.probs.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Total mass; 1.0 up to rounding.
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }
}

/// Weights outside this band trigger a rescale during replay.
const RESCALE_ABOVE: f64 = 1e150;
const RESCALE_BELOW: f64 = 1e-150;

/// Replay `events` over the lexicon's base frequencies, without normalizing.
///
/// Weights are relative: when a long run of answers pushes them toward
/// overflow or underflow, all of them are divided by the current maximum.
/// Ratios between words, and so the distribution, are unaffected.
pub fn compute_weights(
    lexicon: &Lexicon,
    events: &[AnswerEvent],
    decay: Decay,
) -> Result<Vec<f64>> {
    let mut weights: Vec<f64> = lexicon.base_frequencies().collect();
    for event in events {
        let Some(weight) = weights.get_mut(event.id) else {
            return Err(WordGameError::UnknownWord {
                index: event.id,
                lexicon_len: lexicon.len(),
            });
        };
        *weight *= decay.factor(event.is_correct);

        let updated = *weight;
        let underflowing = updated < RESCALE_BELOW && max_weight(&weights) < RESCALE_BELOW;
        if updated > RESCALE_ABOVE || underflowing {
            rescale(&mut weights);
        }
    }
    Ok(weights)
}

fn max_weight(weights: &[f64]) -> f64 {
    weights.iter().copied().fold(0.0, f64::max)
}

fn rescale(weights: &mut [f64]) {
    let max = max_weight(weights);
    if max > 0.0 && max.is_finite() {
        tracing::trace!(max, "rescaling weights");
        for w in weights.iter_mut() {
            *w /= max;
        }
    }
}

/// Compute the probability of asking each word next.
pub fn compute_distribution(
    lexicon: &Lexicon,
    events: &[AnswerEvent],
    decay: Decay,
) -> Result<Distribution> {
    let weights = compute_weights(lexicon, events, decay)?;
    Distribution::from_weights(weights)
}
