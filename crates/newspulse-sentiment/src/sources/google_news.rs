//! Google News RSS search source.

use async_trait::async_trait;
use newspulse_core::AppConfig;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::feed::parse_feed;
use super::{ArticleSource, FeedEntry};
use crate::error::SentimentError;

pub const DEFAULT_FEED_URL: &str = "https://news.google.com/rss/search";

/// Looks up news via an RSS search endpoint (`?q=<query>`).
#[derive(Debug, Clone)]
pub struct GoogleNewsSource {
    client: reqwest::Client,
    feed_url: String,
    locale: String,
}

impl GoogleNewsSource {
    /// `locale` is appended verbatim to the query string (e.g. `hl=en-US&gl=US`).
    #[must_use]
    pub fn new(client: reqwest::Client, feed_url: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
            locale: locale.into(),
        }
    }

    #[must_use]
    pub fn from_config(client: reqwest::Client, config: &AppConfig) -> Self {
        Self::new(client, &config.feed_url, &config.feed_locale)
    }

    /// Search URL for `query`, with every non-alphanumeric byte percent-encoded.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        let separator = if self.feed_url.contains('?') { '&' } else { '?' };
        if self.locale.is_empty() {
            format!("{}{separator}q={encoded}", self.feed_url)
        } else {
            format!("{}{separator}q={encoded}&{}", self.feed_url, self.locale)
        }
    }
}

#[async_trait]
impl ArticleSource for GoogleNewsSource {
    fn name(&self) -> &'static str {
        "google_news"
    }

    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] on network failure or timeout,
    /// [`SentimentError::UnexpectedStatus`] on a non-2xx response, or
    /// [`SentimentError::Xml`] on a malformed feed.
    async fn lookup(&self, query: &str, limit: usize) -> Result<Vec<FeedEntry>, SentimentError> {
        let url = self.search_url(query);
        tracing::debug!(%url, limit, "fetching news feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        parse_feed(&body, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(feed_url: &str, locale: &str) -> GoogleNewsSource {
        GoogleNewsSource::new(reqwest::Client::new(), feed_url, locale)
    }

    #[test]
    fn search_url_percent_encodes_reserved_characters() {
        let url = source(DEFAULT_FEED_URL, "").search_url("gold & silver/oil?");
        assert_eq!(
            url,
            "https://news.google.com/rss/search?q=gold%20%26%20silver%2Foil%3F"
        );
    }

    #[test]
    fn search_url_appends_locale() {
        let url = source(DEFAULT_FEED_URL, "hl=en-US&gl=US&ceid=US:en").search_url("gold market");
        assert_eq!(
            url,
            "https://news.google.com/rss/search?q=gold%20market&hl=en-US&gl=US&ceid=US:en"
        );
    }

    #[test]
    fn search_url_respects_existing_query_string() {
        let url = source("https://feeds.example.com/search?format=rss", "").search_url("gold");
        assert_eq!(url, "https://feeds.example.com/search?format=rss&q=gold");
    }

    #[test]
    fn search_url_encodes_non_ascii() {
        let url = source(DEFAULT_FEED_URL, "").search_url("café");
        assert_eq!(url, "https://news.google.com/rss/search?q=caf%C3%A9");
    }
}
