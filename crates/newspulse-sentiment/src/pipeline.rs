//! News sentiment pipeline orchestration.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use newspulse_core::{
    AppConfig, ContentMode, NewsQuery, QueryError, ScoreTarget, DEFAULT_LIMIT, DEFAULT_MAX_LIMIT,
};

use crate::aggregate::aggregate;
use crate::client::build_http_client;
use crate::content::{ContentFetcher, FetchedContent, HttpContentFetcher};
use crate::error::SentimentError;
use crate::scorer::{build_scorer, score_text, SentimentScorer};
use crate::sources::{lookup_feed, ArticleSource, FeedEntry, GoogleNewsSource};
use crate::types::{Article, ScoredArticle, SummaryReport};

/// Run-time knobs fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub content_mode: ContentMode,
    pub score_target: ScoreTarget,
    /// Parallel article downloads in full-text mode. `1` is sequential.
    pub fetch_concurrency: usize,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            content_mode: ContentMode::Headline,
            score_target: ScoreTarget::Title,
            fetch_concurrency: 1,
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl PipelineOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            content_mode: config.content_mode,
            score_target: config.score_target,
            fetch_concurrency: config.fetch_concurrency,
            default_limit: config.default_limit,
            max_limit: config.max_limit,
        }
    }
}

/// Query → discovery → content → scoring → aggregation.
///
/// Holds only read-only collaborators, so one instance serves every request.
#[derive(Clone)]
pub struct NewsSentimentPipeline {
    source: Arc<dyn ArticleSource>,
    fetcher: Arc<dyn ContentFetcher>,
    scorer: Arc<dyn SentimentScorer>,
    options: PipelineOptions,
}

impl std::fmt::Debug for NewsSentimentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsSentimentPipeline")
            .field("source", &self.source.name())
            .field("scorer", &self.scorer.name())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl NewsSentimentPipeline {
    #[must_use]
    pub fn new(
        source: Arc<dyn ArticleSource>,
        fetcher: Arc<dyn ContentFetcher>,
        scorer: Arc<dyn SentimentScorer>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            source,
            fetcher,
            scorer,
            options,
        }
    }

    /// Wire the production collaborators described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SentimentError> {
        let client = build_http_client(config.request_timeout_secs, &config.user_agent)?;
        let source = GoogleNewsSource::from_config(client.clone(), config);
        let fetcher = HttpContentFetcher::new(client);
        Ok(Self::new(
            Arc::new(source),
            Arc::new(fetcher),
            build_scorer(config.scorer),
            PipelineOptions::from_config(config),
        ))
    }

    #[must_use]
    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    #[must_use]
    pub fn scorer(&self) -> &dyn SentimentScorer {
        self.scorer.as_ref()
    }

    /// Validate raw input against this pipeline's limit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyQuery`] for empty or whitespace-only text.
    pub fn query(&self, text: &str, limit: Option<i64>) -> Result<NewsQuery, QueryError> {
        NewsQuery::with_bounds(
            text,
            limit,
            self.options.default_limit,
            self.options.max_limit,
        )
    }

    /// Validate `text` and run the pipeline. Nothing is fetched for invalid input.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyQuery`] for empty or whitespace-only text.
    pub async fn analyze(
        &self,
        text: &str,
        limit: Option<i64>,
    ) -> Result<SummaryReport, QueryError> {
        let query = self.query(text, limit)?;
        Ok(self.run(&query).await)
    }

    /// Discover up to `query.limit()` articles, newest first.
    ///
    /// A failed feed lookup yields an empty list. In full-text mode each
    /// article's body is fetched; failures leave the sentinel content.
    pub async fn fetch_news(&self, query: &NewsQuery) -> Vec<Article> {
        let entries = lookup_feed(self.source.as_ref(), query.text(), query.limit())
            .await
            .into_entries();

        match self.options.content_mode {
            ContentMode::Headline => entries
                .into_iter()
                .map(|entry| {
                    let content = entry.title().to_string();
                    into_article(entry, content)
                })
                .collect(),
            ContentMode::FullText => {
                stream::iter(entries)
                    .map(|entry| self.with_fetched_content(entry))
                    .buffered(self.options.fetch_concurrency.max(1))
                    .collect::<Vec<_>>()
                    .await
            }
        }
    }

    async fn with_fetched_content(&self, entry: FeedEntry) -> Article {
        let fetched = self.fetcher.fetch_content(entry.link()).await;
        if let FetchedContent::Unavailable(reason) = &fetched {
            tracing::debug!(link = entry.link(), %reason, "article content not retrieved");
        }
        into_article(entry, fetched.into_text())
    }

    /// Attach polarity and label to one article.
    #[must_use]
    pub fn score_article(&self, article: Article) -> ScoredArticle {
        let text = match self.options.score_target {
            ScoreTarget::Title => article.title.as_str(),
            ScoreTarget::Content if article.has_content() => article.content.as_str(),
            ScoreTarget::Content => "",
        };
        let score = score_text(self.scorer.as_ref(), text);
        ScoredArticle::new(article, &score)
    }

    /// Run the full pipeline for one validated query.
    ///
    /// Upstream failures degrade to fewer or emptier articles; this never fails.
    pub async fn run(&self, query: &NewsQuery) -> SummaryReport {
        let articles = self.fetch_news(query).await;
        let scored: Vec<ScoredArticle> = articles
            .into_iter()
            .map(|article| self.score_article(article))
            .collect();
        let summary = aggregate(&scored);

        tracing::info!(
            query = query.text(),
            limit = query.limit(),
            total = scored.len(),
            positive = summary.positive.count,
            neutral = summary.neutral.count,
            negative = summary.negative.count,
            "news sentiment run complete"
        );

        SummaryReport {
            query: query.original().to_string(),
            total_articles: scored.len(),
            summary,
            articles: scored,
        }
    }
}

fn into_article(entry: FeedEntry, content: String) -> Article {
    Article {
        title: entry.title.unwrap_or_default(),
        link: entry.link.unwrap_or_default(),
        published: entry.published.unwrap_or_default(),
        content,
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
