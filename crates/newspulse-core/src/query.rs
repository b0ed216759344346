//! Validated analysis request.

use thiserror::Error;

/// Article count used when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 10;

/// Upper bound applied to requested article counts.
pub const DEFAULT_MAX_LIMIT: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("query must not be empty")]
    EmptyQuery,
}

/// A search query that has passed input validation.
///
/// The lookup text is trimmed and non-empty; the limit is in `1..=max_limit`.
/// The caller's input is kept verbatim for echoing back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    original: String,
    text: String,
    limit: usize,
}

impl NewsQuery {
    /// Validate a raw query using [`DEFAULT_LIMIT`] and [`DEFAULT_MAX_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyQuery`] if `text` is empty or whitespace-only.
    pub fn new(text: &str, limit: Option<i64>) -> Result<Self, QueryError> {
        Self::with_bounds(text, limit, DEFAULT_LIMIT, DEFAULT_MAX_LIMIT)
    }

    /// Validate a raw query against explicit limit bounds.
    ///
    /// A missing limit, or one below 1, falls back to `default_limit`.
    /// Limits above `max_limit` are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyQuery`] if `text` is empty or whitespace-only.
    pub fn with_bounds(
        text: &str,
        limit: Option<i64>,
        default_limit: usize,
        max_limit: usize,
    ) -> Result<Self, QueryError> {
        let original = text;
        let text = text.trim();
        if text.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let max_limit = max_limit.max(1);
        let limit = match limit {
            Some(n) if n >= 1 => usize::try_from(n).unwrap_or(max_limit),
            _ => default_limit.max(1),
        }
        .min(max_limit);

        Ok(Self {
            original: original.to_string(),
            text: text.to_string(),
            limit,
        })
    }

    /// The query exactly as the caller supplied it.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Trimmed text sent to the feed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
