//! Article discovery.

mod feed;
mod google_news;

pub use google_news::{GoogleNewsSource, DEFAULT_FEED_URL};

use async_trait::async_trait;

use crate::error::SentimentError;

/// One raw feed entry. Any field may be absent in the upstream document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
}

impl FeedEntry {
    /// Title, or `""` when the entry had none.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Link, or `""` when the entry had none.
    #[must_use]
    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or("")
    }

    /// Publication timestamp as written in the feed, or `""`.
    #[must_use]
    pub fn published(&self) -> &str {
        self.published.as_deref().unwrap_or("")
    }
}

/// A news-feed collaborator keyed by free-text query.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Return at most `limit` entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if the feed cannot be fetched or parsed.
    async fn lookup(&self, query: &str, limit: usize) -> Result<Vec<FeedEntry>, SentimentError>;
}

/// Outcome of a feed lookup with failures made explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLookup {
    Found(Vec<FeedEntry>),
    /// The feed could not be read; carries the reason for logging.
    Unavailable(String),
}

impl FeedLookup {
    /// Entries on success, an empty list when the feed was unavailable.
    #[must_use]
    pub fn into_entries(self) -> Vec<FeedEntry> {
        match self {
            Self::Found(entries) => entries,
            Self::Unavailable(_) => Vec::new(),
        }
    }
}

/// Query `source` once, truncating to `limit` and folding failures into
/// [`FeedLookup::Unavailable`].
pub async fn lookup_feed(source: &dyn ArticleSource, query: &str, limit: usize) -> FeedLookup {
    match source.lookup(query, limit).await {
        Ok(mut entries) => {
            entries.truncate(limit);
            tracing::debug!(
                source = source.name(),
                query,
                count = entries.len(),
                "collected feed entries"
            );
            FeedLookup::Found(entries)
        }
        Err(e) => {
            tracing::warn!(
                source = source.name(),
                query,
                error = %e,
                "feed lookup failed; continuing with no articles"
            );
            FeedLookup::Unavailable(e.to_string())
        }
    }
}
