//! Rule-based fake review detection
//!
//! Combines the extracted [`FeatureSet`] and pattern flags into four
//! component suspicion scores, mixes them with fixed weights into a fake
//! probability, and produces the explainable [`DetectionResult`].

use chrono::Utc;
use reviewguard_core::{AccuracyMetrics, DetectionResult, ModelInfo, ReviewInput};

use crate::features::{FeatureExtractor, FeatureSet};
use crate::patterns::check_fake_patterns;

/// Model version reported by informational endpoints
pub const MODEL_VERSION: &str = "1.0.0";

/// Fake probability above which a review is classified fake
const FAKE_THRESHOLD: f64 = 0.6;

/// Fixed component weights; they sum to 1.0
#[derive(Debug, Clone, Copy)]
pub struct DetectorWeights {
    pub text_quality: f64,
    pub sentiment_analysis: f64,
    pub reviewer_behavior: f64,
    pub pattern_matching: f64,
}

impl Default for DetectorWeights {
    fn default() -> Self {
        Self {
            text_quality: 0.25,
            sentiment_analysis: 0.20,
            reviewer_behavior: 0.25,
            pattern_matching: 0.30,
        }
    }
}

/// Core fake review detector
///
/// Holds only read-only configuration; analysis is pure computation and a
/// single instance can be shared across request handlers.
pub struct Detector {
    extractor: FeatureExtractor,
    weights: DetectorWeights,
}

impl Detector {
    pub fn new() -> Self {
        Self::with_weights(DetectorWeights::default())
    }

    pub fn with_weights(weights: DetectorWeights) -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            weights,
        }
    }

    /// Analyze a single review for fake indicators.
    ///
    /// Total for any well-formed input: no failure path once the extractor
    /// has been built.
    pub fn analyze(&self, review: &ReviewInput) -> DetectionResult {
        let features = self.extractor.extract(
            &review.text,
            review.rating,
            review.reviewer_total_reviews,
            review.reviewer_account_age_days,
            review.review_date,
        );

        let pattern_flags = check_fake_patterns(&review.text);

        let text_score = text_quality_score(&features);
        let sentiment_score = sentiment_score(&features);
        let reviewer_score = reviewer_behavior_score(&features);
        let pattern_score = pattern_score(&pattern_flags);

        let fake_probability = self.weights.text_quality * text_score
            + self.weights.sentiment_analysis * sentiment_score
            + self.weights.reviewer_behavior * reviewer_score
            + self.weights.pattern_matching * pattern_score;

        let mut flags = pattern_flags;
        flags.extend(behavior_flags(&features));

        let explanation = explanation(
            fake_probability,
            text_score,
            sentiment_score,
            reviewer_score,
            pattern_score,
            &flags,
        );

        DetectionResult {
            is_fake: fake_probability > FAKE_THRESHOLD,
            confidence_score: fake_probability * 100.0,
            fake_probability,
            flags,
            explanation,
        }
    }

    /// Analyze reviews in input order; items are independent
    pub fn analyze_batch(&self, reviews: &[ReviewInput]) -> Vec<DetectionResult> {
        reviews.iter().map(|review| self.analyze(review)).collect()
    }

    /// Static metadata about the rule set
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_version: MODEL_VERSION.to_string(),
            features_used: vec![
                "text_quality".to_string(),
                "sentiment_analysis".to_string(),
                "reviewer_behavior".to_string(),
                "pattern_matching".to_string(),
            ],
            // Placeholder figures; the rule set has no held-out evaluation
            accuracy_metrics: AccuracyMetrics {
                precision: 0.82,
                recall: 0.78,
                f1_score: 0.80,
            },
            last_updated: Utc::now(),
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

/// Text quality suspicion score in [0, 1], higher = more suspicious
fn text_quality_score(features: &FeatureSet) -> f64 {
    let mut score: f64 = 0.0;

    if features.text_length < 20 {
        score += 0.3;
    } else if features.text_length > 2000 {
        score += 0.2;
    }

    if features.repeated_words > 3 {
        score += 0.2;
    }
    if features.repeated_chars > 0 {
        score += 0.1;
    }

    if features.capitalization_ratio > 0.15 {
        score += 0.2;
    }
    if features.exclamation_count > 3 {
        score += 0.15;
    }

    if features.avg_sentence_length < 3.0 {
        score += 0.1;
    } else if features.avg_sentence_length > 30.0 {
        score += 0.1;
    }

    score.min(1.0)
}

/// Sentiment-based suspicion score
fn sentiment_score(features: &FeatureSet) -> f64 {
    let mut score: f64 = 0.0;

    if features.is_extreme_sentiment {
        score += 0.4;
    }
    if features.high_mismatch {
        score += 0.3;
    }
    if features.is_extreme_rating {
        score += 0.2;
    }

    score.min(1.0)
}

/// Reviewer behavior suspicion score
fn reviewer_behavior_score(features: &FeatureSet) -> f64 {
    let mut score: f64 = 0.0;

    if features.is_new_reviewer {
        score += 0.3;
    }

    if features.reviews_per_day > 2.0 {
        score += 0.4;
    } else if features.reviews_per_day > 1.0 {
        score += 0.2;
    }

    if features.reviewer_total_reviews == 1 {
        score += 0.2;
    } else if features.reviewer_total_reviews < 5 {
        score += 0.1;
    }

    score.min(1.0)
}

/// Pattern-based suspicion score
fn pattern_score(pattern_flags: &[String]) -> f64 {
    let mut score = pattern_flags.len() as f64 * 0.2;

    if pattern_flags.iter().any(|f| f == "excessive_positive_words") {
        score += 0.1;
    }
    if pattern_flags.iter().any(|f| f == "excessive_exclamation") {
        score += 0.1;
    }

    score.min(1.0)
}

/// Behavioral red flags, in fixed order
fn behavior_flags(features: &FeatureSet) -> Vec<String> {
    let mut flags = Vec::new();

    if features.is_new_reviewer {
        flags.push("new_account".to_string());
    }
    if features.reviews_per_day > 2.0 {
        flags.push("high_review_frequency".to_string());
    }
    if features.high_mismatch {
        flags.push("sentiment_rating_mismatch".to_string());
    }
    if features.is_extreme_sentiment {
        flags.push("extreme_sentiment".to_string());
    }
    if features.capitalization_ratio > 0.15 {
        flags.push("excessive_caps".to_string());
    }
    if features.text_length < 20 {
        flags.push("very_short_text".to_string());
    }

    flags
}

/// Human-readable explanation of the verdict
fn explanation(
    fake_probability: f64,
    text_score: f64,
    sentiment_score: f64,
    reviewer_score: f64,
    pattern_score: f64,
    flags: &[String],
) -> String {
    let base = if fake_probability < 0.3 {
        "This review appears authentic"
    } else if fake_probability < 0.6 {
        "This review shows some suspicious indicators"
    } else {
        "This review appears likely to be fake"
    };

    let mut reasons = Vec::new();
    if text_score > 0.4 {
        reasons.push("poor text quality");
    }
    if sentiment_score > 0.4 {
        reasons.push("suspicious sentiment patterns");
    }
    if reviewer_score > 0.4 {
        reasons.push("questionable reviewer behavior");
    }
    if pattern_score > 0.4 {
        reasons.push("matches known fake review patterns");
    }

    let mut explanation = if reasons.is_empty() {
        format!("{base}.")
    } else {
        format!("{base} due to: {}.", reasons.join(", "))
    };

    if !flags.is_empty() {
        let top: Vec<&str> = flags.iter().take(3).map(String::as_str).collect();
        explanation.push_str(&format!(" Key indicators: {}.", top.join(", ")));
    }

    explanation
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HYPED_TEXT: &str = "AMAZING AMAZING AMAZING!!! This is the BEST laptop EVER!!! \
        Five stars! Highly recommend! Must buy! Perfect quality! Fast shipping! \
        Love it so much!!! BEST PURCHASE EVER!!!";

    const GENUINE_TEXT: &str = "I've been using this laptop for 3 months now and it handles \
        my daily workload without any trouble. The battery lasts about six hours, the keyboard \
        is comfortable, and the screen is sharp enough for spreadsheets. The fan gets a little \
        loud under heavy load, which is my only real complaint. Overall a decent machine for \
        the price.";

    fn hyped_review() -> ReviewInput {
        ReviewInput {
            reviewer_total_reviews: 1,
            reviewer_account_age_days: 5,
            ..ReviewInput::new(HYPED_TEXT, 5)
        }
    }

    #[test]
    fn default_weights_sum_to_one() {
        let w = DetectorWeights::default();
        let sum = w.text_quality + w.sentiment_analysis + w.reviewer_behavior + w.pattern_matching;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn hyped_review_is_fake() {
        let result = Detector::new().analyze(&hyped_review());

        assert!(result.is_fake, "probability was {}", result.fake_probability);
        assert!(result.fake_probability > 0.6);
        for flag in ["fake_pattern_1", "fake_pattern_2", "excessive_exclamation", "new_account"] {
            assert!(
                result.flags.iter().any(|f| f == flag),
                "missing flag {flag} in {:?}",
                result.flags
            );
        }
        assert!(result.explanation.contains("likely to be fake"));
    }

    #[test]
    fn genuine_review_passes() {
        let review = ReviewInput {
            reviewer_total_reviews: 15,
            reviewer_account_age_days: 400,
            ..ReviewInput::new(GENUINE_TEXT, 4)
        };
        let result = Detector::new().analyze(&review);

        assert!(!result.is_fake);
        assert!(result.fake_probability < 0.6);
        assert!(result.explanation.contains("appears authentic"));
    }

    #[test]
    fn short_text_always_scores_suspicious() {
        let detector = Detector::new();
        for rating in 1..=5u8 {
            let result = detector.analyze(&ReviewInput::new("Nice.", rating));
            assert!(result.flags.iter().any(|f| f == "too_short"));
            assert!(result.flags.iter().any(|f| f == "very_short_text"));
            // +0.3 short-text contribution alone puts text quality at 0.3
            assert!(result.fake_probability >= 0.25 * 0.3 - 1e-12);
        }
    }

    #[test]
    fn pattern_flags_precede_behavior_flags() {
        let result = Detector::new().analyze(&hyped_review());

        let pattern_count = result
            .flags
            .iter()
            .take_while(|f| f.starts_with("fake_pattern_") || f.starts_with("excessive_") || f.starts_with("too_"))
            .count();
        let behavior = &result.flags[pattern_count..];
        assert_eq!(behavior[0], "new_account");
        assert!(behavior.contains(&"extreme_sentiment".to_string()));
        assert!(behavior.contains(&"excessive_caps".to_string()));
    }

    #[test]
    fn explanation_lists_top_three_flags() {
        let result = Detector::new().analyze(&hyped_review());
        assert!(result
            .explanation
            .contains("Key indicators: fake_pattern_1, fake_pattern_2, excessive_exclamation."));
    }

    #[test]
    fn analysis_is_idempotent() {
        let detector = Detector::new();
        let review = hyped_review();
        assert_eq!(detector.analyze(&review), detector.analyze(&review));
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let detector = Detector::new();
        let reviews = vec![
            hyped_review(),
            ReviewInput::new(GENUINE_TEXT, 4),
            ReviewInput::new("Meh.", 2),
        ];
        let results = detector.analyze_batch(&reviews);

        assert_eq!(results.len(), reviews.len());
        assert_eq!(results[0], detector.analyze(&reviews[0]));
        assert_eq!(results[2], detector.analyze(&reviews[2]));
    }

    #[test]
    fn model_info_reports_feature_groups() {
        let info = Detector::new().model_info();
        assert_eq!(info.model_version, MODEL_VERSION);
        assert_eq!(info.features_used.len(), 4);
    }

    proptest! {
        #[test]
        fn probability_is_bounded_and_confidence_matches(
            text in ".{0,400}",
            rating in 1..=5u8,
            total_reviews in 0..5000u32,
            account_age in 0..5000u32,
        ) {
            let review = ReviewInput {
                reviewer_total_reviews: total_reviews,
                reviewer_account_age_days: account_age,
                ..ReviewInput::new(text, rating)
            };
            let result = Detector::new().analyze(&review);

            prop_assert!((0.0..=1.0).contains(&result.fake_probability));
            prop_assert_eq!(result.confidence_score, result.fake_probability * 100.0);
        }
    }
}
