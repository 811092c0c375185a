//! Feature extraction for review analysis
//!
//! Turns raw review text plus reviewer metadata into the fixed-schema
//! [`FeatureSet`] consumed by the detector. Every field is computed fresh per
//! call; the extractor holds only the read-only analyzer chosen at startup.

use chrono::{DateTime, Datelike, Timelike, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use crate::sentiment::{default_analyzer, SentimentAnalyzer, SentimentScores};
use crate::stopwords::STOPWORDS;

/// Numeric and boolean features extracted from one review
#[derive(Debug, Clone)]
pub struct FeatureSet {
    // Text features
    pub text_length: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub capitalization_ratio: f64,
    pub exclamation_count: usize,
    pub question_count: usize,
    /// Maximal runs of one character repeated 3+ times (e.g. "soooo")
    pub repeated_chars: usize,
    /// Distinct tokens appearing more than once
    pub repeated_words: usize,
    pub stopword_ratio: f64,

    // Sentiment features
    pub sentiment: SentimentScores,
    pub is_extreme_sentiment: bool,

    // Rating features
    pub rating: u8,
    pub is_extreme_rating: bool,
    pub sentiment_rating_mismatch: f64,
    pub high_mismatch: bool,

    // Reviewer features
    pub reviewer_total_reviews: u32,
    pub reviewer_account_age_days: u32,
    pub is_new_reviewer: bool,
    pub is_very_active: bool,
    pub reviews_per_day: f64,

    /// Present only when the review carried a timestamp
    pub temporal: Option<TemporalFeatures>,
}

/// Time-of-posting features
#[derive(Debug, Clone)]
pub struct TemporalFeatures {
    pub days_since_review: i64,
    pub is_recent_review: bool,
    pub review_hour: u32,
    pub is_business_hours: bool,
    pub is_weekend: bool,
}

/// Extracts the full feature set for a review
pub struct FeatureExtractor {
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl FeatureExtractor {
    /// Create an extractor with the process-default analyzer
    pub fn new() -> Self {
        Self {
            analyzer: default_analyzer(),
        }
    }

    /// Create an extractor with an explicit analyzer (used in tests)
    pub fn with_analyzer(analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Extract all features for one review
    pub fn extract(
        &self,
        text: &str,
        rating: u8,
        reviewer_total_reviews: u32,
        reviewer_account_age_days: u32,
        review_date: Option<DateTime<Utc>>,
    ) -> FeatureSet {
        let words = self.analyzer.words(text);
        let sentence_count = self.analyzer.sentence_count(text);
        let sentiment = self.analyzer.polarity(text);

        let text_length = text.chars().count();
        let word_count = words.len();

        let avg_word_length = if words.is_empty() {
            0.0
        } else {
            words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64
        };

        let avg_sentence_length = if sentence_count == 0 {
            0.0
        } else {
            word_count as f64 / sentence_count as f64
        };

        let capitalization_ratio = if text_length == 0 {
            0.0
        } else {
            text.chars().filter(|c| c.is_uppercase()).count() as f64 / text_length as f64
        };

        let stopword_ratio = if words.is_empty() {
            0.0
        } else {
            words.iter().filter(|w| STOPWORDS.contains(w.as_str())).count() as f64
                / word_count as f64
        };

        let is_extreme_sentiment = sentiment.compound > 0.8 || sentiment.compound < -0.8;

        // Map the 1-5 rating onto [-1, 1] and compare against the compound
        let expected_sentiment = (rating as f64 - 3.0) / 2.0;
        let sentiment_rating_mismatch = (expected_sentiment - sentiment.compound).abs();

        let reviews_per_day =
            reviewer_total_reviews as f64 / reviewer_account_age_days.max(1) as f64;

        FeatureSet {
            text_length,
            word_count,
            sentence_count,
            avg_word_length,
            avg_sentence_length,
            capitalization_ratio,
            exclamation_count: text.matches('!').count(),
            question_count: text.matches('?').count(),
            repeated_chars: count_repeated_char_runs(text),
            repeated_words: count_repeated_words(&words),
            stopword_ratio,
            sentiment,
            is_extreme_sentiment,
            rating,
            is_extreme_rating: rating == 1 || rating == 5,
            sentiment_rating_mismatch,
            high_mismatch: sentiment_rating_mismatch > 0.7,
            reviewer_total_reviews,
            reviewer_account_age_days,
            is_new_reviewer: reviewer_account_age_days < 30,
            is_very_active: reviewer_total_reviews > 50,
            reviews_per_day,
            temporal: review_date.map(extract_temporal),
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_temporal(review_date: DateTime<Utc>) -> TemporalFeatures {
    let days_since_review = (Utc::now() - review_date).num_days();
    let review_hour = review_date.hour();

    TemporalFeatures {
        days_since_review,
        is_recent_review: days_since_review < 7,
        review_hour,
        is_business_hours: (9..=17).contains(&review_hour),
        is_weekend: review_date.weekday().num_days_from_monday() >= 5,
    }
}

/// Count maximal runs of a single character repeated 3 or more times
fn count_repeated_char_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut prev: Option<char> = None;
    let mut run_len = 0;

    for c in text.chars() {
        if Some(c) == prev {
            run_len += 1;
        } else {
            if run_len >= 3 {
                runs += 1;
            }
            prev = Some(c);
            run_len = 1;
        }
    }
    if run_len >= 3 {
        runs += 1;
    }

    runs
}

/// Count distinct tokens that appear more than once
fn count_repeated_words(words: &[String]) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in words {
        *counts.entry(word.as_str()).or_default() += 1;
    }
    counts.values().filter(|&&count| count > 1).count()
}
