use serde::Serialize;

/// Placeholder stored in [`Article::content`] when no body text is available.
pub const CONTENT_NOT_RETRIEVED: &str = "Content not retrieved.";

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Polarities strictly above this are positive.
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    /// Polarities strictly below this are negative.
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    pub const ALL: [Sentiment; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Classify a polarity. The closed band `[-0.05, 0.05]` is neutral.
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > Self::POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < Self::NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component weights reported by analyzers that split text into
/// positive, neutral and negative proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Raw output of a scoring collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    /// Normalized polarity, conventionally in `[-1.0, 1.0]`.
    pub compound: f64,
    pub breakdown: Option<ScoreBreakdown>,
}

impl PolarityScores {
    #[must_use]
    pub fn compound_only(compound: f64) -> Self {
        Self {
            compound,
            breakdown: None,
        }
    }
}

/// A polarity together with the label derived from it.
///
/// The label can only be produced through [`Sentiment::from_polarity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    polarity: f64,
    sentiment: Sentiment,
    breakdown: Option<ScoreBreakdown>,
}

impl SentimentScore {
    #[must_use]
    pub fn new(polarity: f64, breakdown: Option<ScoreBreakdown>) -> Self {
        Self {
            polarity,
            sentiment: Sentiment::from_polarity(polarity),
            breakdown,
        }
    }

    /// Zero polarity, neutral label, no breakdown.
    #[must_use]
    pub fn neutral() -> Self {
        Self::new(0.0, None)
    }

    #[must_use]
    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    #[must_use]
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    #[must_use]
    pub fn breakdown(&self) -> Option<ScoreBreakdown> {
        self.breakdown
    }

    /// Human-readable summary of the component weights, if the scorer had any.
    #[must_use]
    pub fn explanation(&self) -> Option<String> {
        self.breakdown.map(|b| {
            format!(
                "positive {:.3}, neutral {:.3}, negative {:.3} (compound {:.4})",
                b.positive, b.neutral, b.negative, self.polarity
            )
        })
    }
}

/// One discovered news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Passed through exactly as the feed reported it.
    pub published: String,
    pub content: String,
}

impl Article {
    /// `false` when `content` holds [`CONTENT_NOT_RETRIEVED`].
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content != CONTENT_NOT_RETRIEVED
    }
}

/// An [`Article`] with its sentiment attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredArticle {
    #[serde(flatten)]
    article: Article,
    sentiment: Sentiment,
    polarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

impl ScoredArticle {
    #[must_use]
    pub fn new(article: Article, score: &SentimentScore) -> Self {
        Self {
            article,
            sentiment: score.sentiment(),
            polarity: score.polarity(),
            explanation: score.explanation(),
        }
    }

    #[must_use]
    pub fn article(&self) -> &Article {
        &self.article
    }

    #[must_use]
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    #[must_use]
    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

/// Count and share of one sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LabelSummary {
    pub count: usize,
    pub percent: f64,
}

/// Per-label distribution. Every label is always present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentSummary {
    pub positive: LabelSummary,
    pub neutral: LabelSummary,
    pub negative: LabelSummary,
}

impl SentimentSummary {
    #[must_use]
    pub fn get(&self, sentiment: Sentiment) -> LabelSummary {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub(crate) fn get_mut(&mut self, sentiment: Sentiment) -> &mut LabelSummary {
        match sentiment {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Neutral => &mut self.neutral,
            Sentiment::Negative => &mut self.negative,
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub query: String,
    pub total_articles: usize,
    pub summary: SentimentSummary,
    pub articles: Vec<ScoredArticle>,
}
