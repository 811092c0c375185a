//! Lexicon-based sentiment scoring and tokenization
//!
//! Two implementations sit behind [`SentimentAnalyzer`]: the Aho-Corasick
//! backed [`LexiconAnalyzer`] used in normal operation, and a plain
//! [`FallbackAnalyzer`] selected at startup if the matcher cannot be built.
//! Both are deterministic and produce scores in the same ranges, so the
//! detector never has to branch on which one it received.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;
use reviewguard_core::{Error, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

/// Fixed positive sentiment lexicon
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "perfect",
    "love",
    "best",
    "awesome",
];

/// Fixed negative sentiment lexicon
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "hate",
    "disappointing",
    "poor",
    "useless",
];

/// Polarity scores for a piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    /// Overall polarity in [-1, 1]
    pub compound: f64,
    /// Positive share in [0, 1]
    pub positive: f64,
    /// Negative share in [0, 1]
    pub negative: f64,
    /// Neutral share in [0, 1]
    pub neutral: f64,
}

impl SentimentScores {
    /// Scores for text with no sentiment-bearing words
    pub fn neutral() -> Self {
        Self {
            compound: 0.0,
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
        }
    }
}

/// Tokenization and sentiment capability used by the feature extractor
pub trait SentimentAnalyzer: Send + Sync {
    /// Lowercase word tokens for the text
    fn words(&self, text: &str) -> Vec<String>;

    /// Number of sentences in the text
    fn sentence_count(&self, text: &str) -> usize;

    /// Polarity scores for the text
    fn polarity(&self, text: &str) -> SentimentScores;
}

/// Compute polarity from lexicon hit counts.
///
/// `pos_count`/`neg_count` are the number of distinct lexicon entries
/// contained in the text, `word_count` the whitespace token count.
fn scores_from_counts(pos_count: usize, neg_count: usize, word_count: usize) -> SentimentScores {
    let total = pos_count + neg_count;
    if total == 0 {
        return SentimentScores::neutral();
    }

    let words = word_count.max(1) as f64;
    let compound = ((pos_count as f64 - neg_count as f64) / total as f64).clamp(-1.0, 1.0);
    let positive = (pos_count as f64 / words * 3.0).clamp(0.0, 1.0);
    let negative = (neg_count as f64 / words * 3.0).clamp(0.0, 1.0);
    let neutral = (1.0 - positive - negative).clamp(0.0, 1.0);

    SentimentScores {
        compound,
        positive,
        negative,
        neutral,
    }
}

/// Word tokens: alphanumeric runs plus standalone punctuation
static WORD_TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+|[^\w\s]").expect("word token pattern is valid"));

/// Sentence boundaries: runs of terminal punctuation
static SENTENCE_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence break pattern is valid"));

/// Primary analyzer backed by Aho-Corasick lexicon matchers
pub struct LexiconAnalyzer {
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconAnalyzer {
    pub fn new() -> Result<Self> {
        let positive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(POSITIVE_WORDS)
            .map_err(|e| Error::extraction(format!("failed to build positive matcher: {e}")))?;

        let negative = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(NEGATIVE_WORDS)
            .map_err(|e| Error::extraction(format!("failed to build negative matcher: {e}")))?;

        Ok(Self { positive, negative })
    }

    /// Number of distinct lexicon entries contained in the text
    fn distinct_hits(matcher: &AhoCorasick, text: &str) -> usize {
        let seen: HashSet<usize> = matcher
            .find_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect();
        seen.len()
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn words(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        WORD_TOKENS
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn sentence_count(&self, text: &str) -> usize {
        SENTENCE_BREAKS
            .split(text)
            .filter(|fragment| !fragment.trim().is_empty())
            .count()
    }

    fn polarity(&self, text: &str) -> SentimentScores {
        let pos = Self::distinct_hits(&self.positive, text);
        let neg = Self::distinct_hits(&self.negative, text);
        scores_from_counts(pos, neg, text.split_whitespace().count())
    }
}

/// Deterministic degrade path: whitespace tokens, period sentences, plain
/// substring containment
pub struct FallbackAnalyzer;

impl SentimentAnalyzer for FallbackAnalyzer {
    fn words(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn sentence_count(&self, text: &str) -> usize {
        text.split('.').count()
    }

    fn polarity(&self, text: &str) -> SentimentScores {
        let lower = text.to_lowercase();
        let pos = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
        let neg = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
        scores_from_counts(pos, neg, lower.split_whitespace().count())
    }
}

/// Build the analyzer used for the lifetime of the process.
///
/// Never fails: if the lexicon matchers cannot be built the fallback is
/// returned instead, with a warning.
pub fn default_analyzer() -> Arc<dyn SentimentAnalyzer> {
    match LexiconAnalyzer::new() {
        Ok(analyzer) => Arc::new(analyzer),
        Err(e) => {
            warn!("lexicon analyzer unavailable, using fallback: {e}");
            Arc::new(FallbackAnalyzer)
        }
    }
}
