//! Per-word and whole-history answer statistics.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::model::AnswerEvent;
use crate::weights::{compute_weights, Decay, Distribution};

/// Answer record and current selection odds for one word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordStats {
    /// Lexicon index.
    pub index: usize,
    pub a: String,
    pub b: String,
    /// Times the word was asked.
    pub attempts: u32,
    pub correct: u32,
    pub incorrect: u32,
    /// `correct / attempts`, or `None` if never asked.
    pub accuracy: Option<f64>,
    /// Weight after replaying the history (not normalized; relative to the
    /// other words once a long history has been rescaled).
    pub weight: f64,
    /// Probability of being asked next.
    pub probability: f64,
}

/// Totals across the whole history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total_answers: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Number of different words answered at least once.
    pub distinct_words: usize,
    /// `correct / total_answers`, or 0.0 for an empty history.
    pub accuracy: f64,
}

/// Summarize a sequence of answers.
pub fn summarize(events: &[AnswerEvent]) -> HistorySummary {
    let correct = events.iter().filter(|e| e.is_correct).count();
    let mut ids: Vec<usize> = events.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    ids.dedup();

    HistorySummary {
        total_answers: events.len(),
        correct,
        incorrect: events.len() - correct,
        distinct_words: ids.len(),
        accuracy: if events.is_empty() {
            0.0
        } else {
            correct as f64 / events.len() as f64
        },
    }
}

/// Compute statistics for every word in the lexicon, in lexicon order.
pub fn compute_word_stats(
    lexicon: &Lexicon,
    events: &[AnswerEvent],
    decay: Decay,
) -> Result<Vec<WordStats>> {
    let weights = compute_weights(lexicon, events, decay)?;
    let distribution = Distribution::from_weights(weights.clone())?;

    let mut tallies = vec![(0u32, 0u32); lexicon.len()];
    for event in events {
        let (correct, incorrect) = &mut tallies[event.id];
        if event.is_correct {
            *correct += 1;
        } else {
            *incorrect += 1;
        }
    }

    let stats = lexicon
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let (correct, incorrect) = tallies[index];
            let attempts = correct + incorrect;
            WordStats {
                index,
                a: entry.a.clone(),
                b: entry.b.clone(),
                attempts,
                correct,
                incorrect,
                accuracy: (attempts > 0).then(|| correct as f64 / attempts as f64),
                weight: weights[index],
                probability: distribution.probabilities()[index],
            }
        })
        .collect();

    Ok(stats)
}

/// The `n` words most likely to be asked next, highest probability first.
pub fn most_likely(stats: &[WordStats], n: usize) -> Vec<&WordStats> {
    let mut ranked: Vec<&WordStats> = stats.iter().collect();
    ranked.sort_by(|a, b| {
        b.probability
            .total_cmp(&a.probability)
            .then(a.index.cmp(&b.index))
    });
    ranked.truncate(n);
    ranked
}
