//! `score` command handler.

use newspulse_core::ScorerKind;
use newspulse_sentiment::{build_scorer, score_text, SentimentScore};

/// Score `text` with the selected scorer and print the result.
///
/// # Errors
///
/// Returns an error if JSON output is requested and serialization fails.
pub(crate) fn run_score(kind: ScorerKind, text: &str, json: bool) -> anyhow::Result<()> {
    let scorer = build_scorer(kind);
    let score = score_text(scorer.as_ref(), text);

    if json {
        let value = serde_json::json!({
            "scorer": scorer.name(),
            "polarity": score.polarity(),
            "sentiment": score.sentiment(),
            "explanation": score.explanation(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render_score(scorer.name(), &score));
    }
    Ok(())
}

pub(crate) fn render_score(scorer: &str, score: &SentimentScore) -> String {
    let mut line = format!(
        "{} ({:.4}) via {scorer}",
        score.sentiment().as_str(),
        score.polarity()
    );
    if let Some(explanation) = score.explanation() {
        line.push_str(": ");
        line.push_str(&explanation);
    }
    line
}
