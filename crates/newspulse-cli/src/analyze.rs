//! `analyze` command handler.

use std::fmt::Write as _;

use newspulse_core::{AppConfig, ContentMode, ScorerKind};
use newspulse_sentiment::{NewsSentimentPipeline, Sentiment, SummaryReport};

const TITLE_WIDTH: usize = 60;

#[derive(Debug, Clone, Default)]
pub(crate) struct AnalyzeOptions {
    pub limit: Option<i64>,
    pub full_text: bool,
    pub scorer: Option<ScorerKind>,
    pub json: bool,
}

/// Apply command-line overrides on top of the loaded configuration.
pub(crate) fn apply_overrides(mut config: AppConfig, options: &AnalyzeOptions) -> AppConfig {
    if options.full_text {
        config.content_mode = ContentMode::FullText;
    }
    if let Some(scorer) = options.scorer {
        config.scorer = scorer;
    }
    config
}

/// Run the news pipeline for `query` and print the report.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the query is empty,
/// or the report cannot be serialized.
pub(crate) async fn run_analyze(
    config: AppConfig,
    query: &str,
    options: &AnalyzeOptions,
) -> anyhow::Result<()> {
    let config = apply_overrides(config, options);
    let pipeline = NewsSentimentPipeline::from_config(&config)?;
    let report = pipeline.analyze(query, options.limit).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

/// Plain-text table of per-article labels followed by the distribution.
pub(crate) fn render_report(report: &SummaryReport) -> String {
    let mut out = String::new();

    if report.articles.is_empty() {
        let _ = writeln!(out, "no articles found for \"{}\"", report.query);
    } else {
        let _ = writeln!(out, "{:<10}{:>9}  TITLE", "SENTIMENT", "POLARITY");
        for article in &report.articles {
            let _ = writeln!(
                out,
                "{:<10}{:>9.4}  {}",
                article.sentiment().as_str(),
                article.polarity(),
                truncate(&article.article().title, TITLE_WIDTH)
            );
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "query \"{}\": {} articles",
        report.query, report.total_articles
    );
    for label in Sentiment::ALL {
        let share = report.summary.get(label);
        let _ = writeln!(
            out,
            "  {:<9}{:>4}  {:>6.2}%",
            label.as_str(),
            share.count,
            share.percent
        );
    }
    out
}
