//! Lexicon- and rule-based compound sentiment analyzer.
//!
//! Each token receives a valence from [`VALENCES`], adjusted by the
//! preceding booster words, negations and capitalisation. Valences are then
//! reweighted around a contrastive "but", amplified by trailing `!`/`?`, and
//! normalised into a compound score in `[-1.0, 1.0]`.

use std::collections::HashMap;

use super::vader_lexicon::{BOOSTERS, NEGATIONS, VALENCES};
use super::SentimentScorer;
use crate::error::SentimentError;
use crate::types::{PolarityScores, ScoreBreakdown};

/// Added to a word's valence when it is ALL CAPS in mixed-case text.
const C_INCR: f64 = 0.733;
/// Multiplier applied to a valence under negation.
const N_SCALAR: f64 = -0.74;
/// Approximates the maximum expected raw sum in [`normalize`].
const NORMALIZATION_ALPHA: f64 = 15.0;

const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_MAX: f64 = 0.96;

/// Compound sentiment analyzer.
///
/// Construction builds the lexicon index; build one per process and share it.
#[derive(Debug, Clone)]
pub struct VaderAnalyzer {
    lexicon: HashMap<&'static str, f64>,
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: VALENCES.iter().copied().collect(),
        }
    }

    /// Score `text`. Empty text yields a zero compound and zero components.
    #[must_use]
    pub fn analyze(&self, text: &str) -> PolarityScores {
        let tokens: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let lowers: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = has_cap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let lower = lowers[i].as_str();
            if booster_weight(lower).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if lower == "kind" && lowers.get(i + 1).is_some_and(|next| next == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(i, &tokens, &lowers, cap_diff));
        }

        apply_but_rule(&mut sentiments, &lowers);
        score_valence(&sentiments, text)
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    fn valence_at(&self, i: usize, tokens: &[&str], lowers: &[String], cap_diff: bool) -> f64 {
        let Some(&base) = self.lexicon.get(lowers[i].as_str()) else {
            return 0.0;
        };

        let mut valence = base;
        if cap_diff && is_all_caps(tokens[i]) {
            valence += C_INCR.copysign(valence);
        }

        // Look back up to three tokens for boosters and negations.
        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let j = i - (start_i + 1);
            if self.in_lexicon(&lowers[j]) {
                continue;
            }
            let mut scalar = scalar_inc_dec(tokens[j], &lowers[j], valence, cap_diff);
            if start_i == 1 {
                scalar *= 0.95;
            } else if start_i == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lowers, start_i, i);
        }

        least_check(valence, lowers, i)
    }
}

impl SentimentScorer for VaderAnalyzer {
    fn name(&self) -> &'static str {
        "vader"
    }

    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, SentimentError> {
        Ok(self.analyze(text))
    }
}

/// Strip surrounding punctuation unless that would leave two characters or
/// fewer, which keeps emoticons such as `:)` intact.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are ALL CAPS.
fn has_cap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn booster_weight(word: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(booster, _)| *booster == word)
        .map(|&(_, weight)| weight)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't") || word.contains("n\u{2019}t")
}

fn scalar_inc_dec(token: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster_weight(lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(token) {
        scalar += C_INCR.copysign(valence);
    }
    scalar
}

fn negation_check(valence: f64, lowers: &[String], start_i: usize, i: usize) -> f64 {
    let is_so_or_this = |w: &str| w == "so" || w == "this";
    match start_i {
        0 if is_negation(&lowers[i - 1]) => valence * N_SCALAR,
        1 => {
            if lowers[i - 2] == "never" && is_so_or_this(&lowers[i - 1]) {
                valence * 1.25
            } else if lowers[i - 2] == "without" && lowers[i - 1] == "doubt" {
                valence
            } else if is_negation(&lowers[i - 2]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        2 => {
            if lowers[i - 3] == "never"
                && (is_so_or_this(&lowers[i - 2]) || is_so_or_this(&lowers[i - 1]))
            {
                valence * 1.25
            } else if lowers[i - 3] == "without"
                && (lowers[i - 2] == "doubt" || lowers[i - 1] == "doubt")
            {
                valence
            } else if is_negation(&lowers[i - 3]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// "least" negates the following word unless it reads "at least" or "very least".
fn least_check(valence: f64, lowers: &[String], i: usize) -> f64 {
    if i > 1 && lowers[i - 1] == "least" {
        if lowers[i - 2] != "at" && lowers[i - 2] != "very" {
            return valence * N_SCALAR;
        }
    } else if i > 0 && lowers[i - 1] == "least" {
        return valence * N_SCALAR;
    }
    valence
}

/// Halve valences before the first "but" and boost those after it by half.
fn apply_but_rule(sentiments: &mut [f64], lowers: &[String]) {
    let Some(but_index) = lowers.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_index {
            *sentiment *= 0.5;
        } else if idx > but_index {
            *sentiment *= 1.5;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_MAX,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[allow(clippy::cast_precision_loss)]
fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores {
            compound: 0.0,
            breakdown: Some(ScoreBreakdown {
                positive: 0.0,
                neutral: 0.0,
                negative: 0.0,
            }),
        };
    }

    let punct = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0usize;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    PolarityScores {
        compound: round_to(compound, 4),
        breakdown: Some(ScoreBreakdown {
            positive: round_to((pos_sum / total).abs(), 3),
            neutral: round_to((neu_count as f64 / total).abs(), 3),
            negative: round_to((neg_sum / total).abs(), 3),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        VaderAnalyzer::new().analyze(text).compound
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_text_is_zero() {
        let scores = VaderAnalyzer::new().analyze("");
        assert!(scores.compound.abs() < f64::EPSILON);
        let b = scores.breakdown.expect("breakdown");
        assert!(b.positive.abs() < f64::EPSILON);
        assert!(b.negative.abs() < f64::EPSILON);
    }

    #[test]
    fn single_positive_word() {
        assert_close(compound("good"), 0.4404);
    }

    #[test]
    fn components_split_neutral_tokens() {
        let scores = VaderAnalyzer::new().analyze("The food is good");
        assert_close(scores.compound, 0.4404);
        let b = scores.breakdown.expect("breakdown");
        assert_close(b.positive, 0.492);
        assert_close(b.neutral, 0.508);
        assert_close(b.negative, 0.0);
    }

    #[test]
    fn negation_flips_sign() {
        assert_close(compound("not good"), -0.3412);
        assert!(compound("this isn't good") < 0.0);
        assert!(compound("this doesn\u{2019}t help") < 0.0);
    }

    #[test]
    fn negation_reaches_three_tokens_back() {
        assert!(compound("not a very good quarter") < 0.0);
    }

    #[test]
    fn booster_increases_intensity() {
        assert!(compound("very good") > compound("good"));
        assert!(compound("slightly good") < compound("good"));
    }

    #[test]
    fn booster_follows_negative_direction() {
        assert!(compound("very bad") < compound("bad"));
    }

    #[test]
    fn exclamations_amplify() {
        assert_close(compound("good!!!"), 0.5826);
        // Capped at four.
        assert_close(compound("good!!!!"), compound("good!!!!!!!!"));
    }

    #[test]
    fn caps_emphasis_only_in_mixed_case() {
        assert!(compound("The market is GOOD") > compound("The market is good"));
        assert_close(compound("GOOD"), compound("good"));
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        let score = compound("The rally was good but the outlook is bad");
        assert!(score < 0.0, "got {score}");
    }

    #[test]
    fn at_least_is_not_negation() {
        assert!(compound("at least good") > 0.0);
        assert!(compound("the least good") < 0.0);
    }

    #[test]
    fn without_doubt_is_not_negation() {
        assert!(compound("without doubt a good result") > 0.0);
    }

    #[test]
    fn kind_of_is_neutral_filler() {
        assert_close(compound("kind of good"), compound("good"));
    }

    #[test]
    fn compound_is_bounded() {
        let text = "great great great great great great great great great great!!!!";
        let c = compound(text);
        assert!(c > 0.9 && c <= 1.0, "got {c}");
        let c = compound("worst worst worst worst worst disaster catastrophe");
        assert!((-1.0..-0.9).contains(&c), "got {c}");
    }

    #[test]
    fn unknown_words_are_neutral() {
        assert!(compound("Gold holds ahead of data").abs() < f64::EPSILON);
    }

    #[test]
    fn emoticon_tokens_survive_stripping() {
        assert_eq!(strip_punctuation(":)"), ":)");
        assert_eq!(strip_punctuation("good,"), "good");
        assert_eq!(strip_punctuation("\"rally\""), "rally");
    }
}
