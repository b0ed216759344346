//! Sentiment distribution over a result set.

use crate::types::{ScoredArticle, SentimentSummary};

/// Count articles per label and convert counts to percentages.
///
/// `percent = 100 * count / max(total, 1)`, so an empty input yields zero
/// counts and zero percentages for every label.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(articles: &[ScoredArticle]) -> SentimentSummary {
    let mut summary = SentimentSummary::default();
    for article in articles {
        summary.get_mut(article.sentiment()).count += 1;
    }

    let denom = articles.len().max(1) as f64;
    for label in [
        &mut summary.positive,
        &mut summary.neutral,
        &mut summary.negative,
    ] {
        label.percent = 100.0 * label.count as f64 / denom;
    }
    summary
}
