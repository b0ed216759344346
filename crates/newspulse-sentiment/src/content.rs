//! Article body retrieval.

use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::types::CONTENT_NOT_RETRIEVED;

/// Why an article body could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentFailure {
    /// The entry had no link to fetch.
    MissingLink,
    Timeout,
    Status(u16),
    Transport(String),
    /// The page loaded but contained no paragraph text.
    Empty,
}

impl std::fmt::Display for ContentFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLink => write!(f, "no link"),
            Self::Timeout => write!(f, "timed out"),
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Transport(reason) => write!(f, "transport error: {reason}"),
            Self::Empty => write!(f, "no paragraph text"),
        }
    }
}

/// Result of a body fetch. Never an error: failures are a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedContent {
    Retrieved(String),
    Unavailable(ContentFailure),
}

impl FetchedContent {
    #[must_use]
    pub fn is_retrieved(&self) -> bool {
        matches!(self, Self::Retrieved(_))
    }

    /// The body text, or [`CONTENT_NOT_RETRIEVED`] on failure.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Retrieved(text) => text,
            Self::Unavailable(_) => CONTENT_NOT_RETRIEVED.to_string(),
        }
    }
}

/// Retrieves plain-text article bodies.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch_content(&self, link: &str) -> FetchedContent;
}

/// Downloads a page over HTTP and extracts its `<p>` text.
#[derive(Debug, Clone)]
pub struct HttpContentFetcher {
    client: reqwest::Client,
}

impl HttpContentFetcher {
    /// The client's timeout bounds each fetch.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn classify(error: &reqwest::Error) -> ContentFailure {
    if error.is_timeout() {
        ContentFailure::Timeout
    } else {
        ContentFailure::Transport(error.to_string())
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch_content(&self, link: &str) -> FetchedContent {
        if link.trim().is_empty() {
            return FetchedContent::Unavailable(ContentFailure::MissingLink);
        }

        let response = match self.client.get(link).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(link, error = %e, "article request failed");
                return FetchedContent::Unavailable(classify(&e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(link, status = status.as_u16(), "article returned non-success status");
            return FetchedContent::Unavailable(ContentFailure::Status(status.as_u16()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(link, error = %e, "article body read failed");
                return FetchedContent::Unavailable(classify(&e));
            }
        };

        let text = extract_paragraph_text(&body);
        if text.is_empty() {
            FetchedContent::Unavailable(ContentFailure::Empty)
        } else {
            FetchedContent::Retrieved(text)
        }
    }
}

/// Join the text of every `<p>` element, in document order, with single
/// spaces, then trim the result.
///
/// # Panics
///
/// Does not panic: the selector is a constant.
#[must_use]
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").expect("valid paragraph selector");
    document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_paragraphs_in_order() {
        let html = r"<html><body>
            <h1>Headline</h1>
            <p>First paragraph.</p>
            <div><p>Second <b>bold</b> paragraph.</p></div>
            <script>var x = 1;</script>
        </body></html>";
        assert_eq!(
            extract_paragraph_text(html),
            "First paragraph. Second bold paragraph."
        );
    }

    #[test]
    fn no_paragraphs_yields_empty_string() {
        assert_eq!(extract_paragraph_text("<html><body><div>x</div></body></html>"), "");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(extract_paragraph_text("<p>  padded  </p>"), "padded");
    }

    #[test]
    fn unavailable_content_collapses_to_sentinel() {
        let content = FetchedContent::Unavailable(ContentFailure::Timeout);
        assert!(!content.is_retrieved());
        assert_eq!(content.into_text(), "Content not retrieved.");
    }

    #[test]
    fn retrieved_content_is_passed_through() {
        let content = FetchedContent::Retrieved("Body".to_string());
        assert!(content.is_retrieved());
        assert_eq!(content.into_text(), "Body");
    }

    #[tokio::test]
    async fn empty_link_is_not_requested() {
        let fetcher = HttpContentFetcher::new(reqwest::Client::new());
        assert_eq!(
            fetcher.fetch_content("  ").await,
            FetchedContent::Unavailable(ContentFailure::MissingLink)
        );
    }
}
