//! Sentiment scorers.
//!
//! Every scorer produces a compound polarity; the label is always derived by
//! [`Sentiment::from_polarity`](crate::types::Sentiment::from_polarity), so
//! swapping scorers never changes the thresholding rule.

mod keyword;
mod vader;
mod vader_lexicon;

use std::sync::Arc;

use newspulse_core::ScorerKind;

use crate::error::SentimentError;
use crate::types::{PolarityScores, SentimentScore};

pub use keyword::KeywordScorer;
pub use vader::VaderAnalyzer;

/// A text-in, polarity-out scoring collaborator.
///
/// Implementations must be deterministic: the same text always yields the
/// same scores.
pub trait SentimentScorer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Score `text`. Empty text should produce a zero compound.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Scorer`] if the text cannot be processed.
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, SentimentError>;
}

/// Score `text`, folding scorer failures into a neutral result.
///
/// Errors and non-finite compounds are logged and reported as polarity `0.0`.
pub fn score_text(scorer: &dyn SentimentScorer, text: &str) -> SentimentScore {
    match scorer.polarity_scores(text) {
        Ok(scores) if scores.compound.is_finite() => {
            SentimentScore::new(scores.compound, scores.breakdown)
        }
        Ok(scores) => {
            tracing::warn!(
                scorer = scorer.name(),
                compound = scores.compound,
                "scorer returned a non-finite polarity; treating as neutral"
            );
            SentimentScore::neutral()
        }
        Err(e) => {
            tracing::warn!(
                scorer = scorer.name(),
                error = %e,
                "scorer failed; treating as neutral"
            );
            SentimentScore::neutral()
        }
    }
}

/// Construct the scorer selected in configuration.
///
/// Called once at startup; the returned handle is shared read-only.
#[must_use]
pub fn build_scorer(kind: ScorerKind) -> Arc<dyn SentimentScorer> {
    match kind {
        ScorerKind::Vader => Arc::new(VaderAnalyzer::new()),
        ScorerKind::Keyword => Arc::new(KeywordScorer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    struct FailingScorer;

    impl SentimentScorer for FailingScorer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn polarity_scores(&self, _text: &str) -> Result<PolarityScores, SentimentError> {
            Err(SentimentError::Scorer("model unavailable".to_string()))
        }
    }

    struct NanScorer;

    impl SentimentScorer for NanScorer {
        fn name(&self) -> &'static str {
            "nan"
        }

        fn polarity_scores(&self, _text: &str) -> Result<PolarityScores, SentimentError> {
            Ok(PolarityScores::compound_only(f64::NAN))
        }
    }

    #[test]
    fn failing_scorer_is_neutral() {
        let score = score_text(&FailingScorer, "Gold soars to record");
        assert_eq!(score.sentiment(), Sentiment::Neutral);
        assert!(score.polarity().abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_compound_is_neutral() {
        let score = score_text(&NanScorer, "anything");
        assert_eq!(score.sentiment(), Sentiment::Neutral);
        assert!(score.polarity().abs() < f64::EPSILON);
    }

    #[test]
    fn build_scorer_selects_implementation() {
        assert_eq!(build_scorer(ScorerKind::Vader).name(), "vader");
        assert_eq!(build_scorer(ScorerKind::Keyword).name(), "keyword");
    }

    #[test]
    fn scoring_is_idempotent() {
        for kind in [ScorerKind::Vader, ScorerKind::Keyword] {
            let scorer = build_scorer(kind);
            let text = "Gold slips as dollar strengthens, but analysts remain optimistic!";
            let first = score_text(scorer.as_ref(), text);
            let second = score_text(scorer.as_ref(), text);
            assert_eq!(first, second, "scorer {}", scorer.name());
        }
    }

    #[test]
    fn empty_text_is_neutral_for_every_scorer() {
        for kind in [ScorerKind::Vader, ScorerKind::Keyword] {
            let scorer = build_scorer(kind);
            let score = score_text(scorer.as_ref(), "");
            assert_eq!(score.sentiment(), Sentiment::Neutral, "{}", scorer.name());
            assert!(score.polarity().abs() < f64::EPSILON);
        }
    }
}
