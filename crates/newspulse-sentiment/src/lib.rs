//! News sentiment analysis.
//!
//! Looks up recent headlines for a free-text query through an RSS search
//! feed, optionally downloads each article body, scores every article with a
//! rule-based sentiment analyzer, and reports the label distribution.

pub mod aggregate;
pub mod client;
pub mod content;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod sources;
pub mod types;

pub use aggregate::aggregate;
pub use client::build_http_client;
pub use content::{
    extract_paragraph_text, ContentFailure, ContentFetcher, FetchedContent, HttpContentFetcher,
};
pub use error::SentimentError;
pub use pipeline::{NewsSentimentPipeline, PipelineOptions};
pub use scorer::{build_scorer, score_text, KeywordScorer, SentimentScorer, VaderAnalyzer};
pub use sources::{lookup_feed, ArticleSource, FeedEntry, FeedLookup, GoogleNewsSource};
pub use types::{
    Article, LabelSummary, PolarityScores, ScoreBreakdown, ScoredArticle, Sentiment,
    SentimentScore, SentimentSummary, SummaryReport, CONTENT_NOT_RETRIEVED,
};
