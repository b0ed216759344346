//! Headline keyword scorer.
//!
//! A lightweight alternative to [`super::VaderAnalyzer`]: no rules, just a
//! sum of per-word weights.

use std::collections::HashMap;

use super::SentimentScorer;
use crate::error::SentimentError;
use crate::types::PolarityScores;

/// News-headline word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("rally", 0.5),
    ("rallies", 0.5),
    ("rallied", 0.5),
    ("surge", 0.5),
    ("surges", 0.5),
    ("soar", 0.6),
    ("soars", 0.6),
    ("gain", 0.3),
    ("gains", 0.3),
    ("rise", 0.3),
    ("rises", 0.3),
    ("record", 0.3),
    ("boost", 0.4),
    ("boosts", 0.4),
    ("beat", 0.4),
    ("beats", 0.4),
    ("bullish", 0.5),
    ("optimism", 0.4),
    ("optimistic", 0.4),
    ("growth", 0.3),
    ("recovery", 0.4),
    ("rebound", 0.4),
    ("strong", 0.3),
    ("upgrade", 0.4),
    ("win", 0.4),
    ("wins", 0.4),
    ("good", 0.3),
    ("great", 0.4),
    ("success", 0.5),
    // Negative signals
    ("slump", -0.5),
    ("slumps", -0.5),
    ("plunge", -0.6),
    ("plunges", -0.6),
    ("crash", -0.7),
    ("crashes", -0.7),
    ("fall", -0.3),
    ("falls", -0.3),
    ("slip", -0.3),
    ("slips", -0.3),
    ("drop", -0.3),
    ("drops", -0.3),
    ("loss", -0.4),
    ("losses", -0.4),
    ("bearish", -0.5),
    ("fear", -0.5),
    ("fears", -0.5),
    ("recession", -0.6),
    ("crisis", -0.6),
    ("downgrade", -0.4),
    ("lawsuit", -0.5),
    ("fraud", -0.7),
    ("bankruptcy", -0.8),
    ("layoffs", -0.5),
    ("weak", -0.3),
    ("warning", -0.4),
    ("concern", -0.3),
    ("concerns", -0.3),
    ("bad", -0.4),
    ("worst", -0.6),
];

/// Scores headlines by summing [`LEXICON`] weights, clamped to `[-1.0, 1.0]`.
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    weights: HashMap<&'static str, f64>,
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: LEXICON.iter().copied().collect(),
        }
    }

    /// Sum the weights of every lexicon word in `text`.
    ///
    /// Words are matched case-insensitively with surrounding punctuation
    /// removed. Text with no lexicon words scores `0.0`.
    #[must_use]
    pub fn score(&self, text: &str) -> f64 {
        text.split_whitespace()
            .map(|token| {
                token
                    .trim_matches(|c: char| !c.is_alphabetic())
                    .to_lowercase()
            })
            .filter_map(|word| self.weights.get(word.as_str()).copied())
            .sum::<f64>()
            .clamp(-1.0, 1.0)
    }
}

impl SentimentScorer for KeywordScorer {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, SentimentError> {
        Ok(PolarityScores::compound_only(self.score(text)))
    }
}
