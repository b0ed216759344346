use std::net::SocketAddr;
use std::str::FromStr;

/// How an article's `content` field is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Reuse the headline as content. No per-article requests.
    #[default]
    Headline,
    /// Download each article and extract its paragraph text.
    FullText,
}

impl FromStr for ContentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "headline" => Ok(Self::Headline),
            "full_text" | "full-text" => Ok(Self::FullText),
            other => Err(format!(
                "unknown content mode \"{other}\" (expected headline or full_text)"
            )),
        }
    }
}

impl std::fmt::Display for ContentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentMode::Headline => write!(f, "headline"),
            ContentMode::FullText => write!(f, "full_text"),
        }
    }
}

/// Which article text is handed to the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreTarget {
    #[default]
    Title,
    /// Score the fetched body. Only valid together with [`ContentMode::FullText`].
    Content,
}

impl FromStr for ScoreTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            other => Err(format!(
                "unknown score target \"{other}\" (expected title or content)"
            )),
        }
    }
}

impl std::fmt::Display for ScoreTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTarget::Title => write!(f, "title"),
            ScoreTarget::Content => write!(f, "content"),
        }
    }
}

/// Sentiment scorer implementation selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    #[default]
    Vader,
    Keyword,
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vader" => Ok(Self::Vader),
            "keyword" => Ok(Self::Keyword),
            other => Err(format!(
                "unknown scorer \"{other}\" (expected vader or keyword)"
            )),
        }
    }
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScorerKind::Vader => write!(f, "vader"),
            ScorerKind::Keyword => write!(f, "keyword"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub feed_url: String,
    /// Extra query-string parameters appended to every feed lookup. May be empty.
    pub feed_locale: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub content_mode: ContentMode,
    pub score_target: ScoreTarget,
    pub scorer: ScorerKind,
    pub default_limit: usize,
    pub max_limit: usize,
    pub fetch_concurrency: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("feed_url", &self.feed_url)
            .field("feed_locale", &self.feed_locale)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("content_mode", &format_args!("{}", self.content_mode))
            .field("score_target", &format_args!("{}", self.score_target))
            .field("scorer", &format_args!("{}", self.scorer))
            .field("default_limit", &self.default_limit)
            .field("max_limit", &self.max_limit)
            .field("fetch_concurrency", &self.fetch_concurrency)
            .finish()
    }
}
