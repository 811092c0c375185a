//! Core types for ReviewGuard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum review text length accepted by the platform
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Maximum number of reviews per batch request
pub const MAX_BATCH_SIZE: usize = 100;

/// A single review submitted for analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewInput {
    /// Review text content (1-5000 characters)
    pub text: String,

    /// Star rating given by the reviewer (1-5)
    pub rating: u8,

    /// Unique reviewer identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,

    /// Product/business identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// When the review was posted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<DateTime<Utc>>,

    /// Total reviews written by this reviewer
    #[serde(default)]
    pub reviewer_total_reviews: u32,

    /// Reviewer account age in days
    #[serde(default)]
    pub reviewer_account_age_days: u32,
}

impl ReviewInput {
    /// Create a review from just text and rating, as the quick-analyze
    /// endpoint does
    pub fn new(text: impl Into<String>, rating: u8) -> Self {
        Self {
            text: text.into(),
            rating,
            reviewer_id: None,
            product_id: None,
            review_date: None,
            reviewer_total_reviews: 0,
            reviewer_account_age_days: 0,
        }
    }

    /// Validate the input against platform limits
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::validation("review text must not be empty"));
        }
        if self.text.chars().count() > MAX_TEXT_LENGTH {
            return Err(Error::validation(format!(
                "review text exceeds {MAX_TEXT_LENGTH} characters"
            )));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(Error::validation("rating must be between 1 and 5"));
        }
        Ok(())
    }
}

/// Result of fake review detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Whether the review is likely fake
    pub is_fake: bool,

    /// Confidence score (0-100), always fake_probability * 100
    pub confidence_score: f64,

    /// Probability of being fake (0.0-1.0)
    pub fake_probability: f64,

    /// Red-flag tags in detection order (pattern flags first, then
    /// behavior flags)
    pub flags: Vec<String>,

    /// Human-readable explanation
    pub explanation: String,
}

/// Summary statistics for a batch analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_reviews: usize,
    pub fake_reviews_detected: usize,
    pub fake_percentage: f64,
    /// Mean confidence score, rounded to 2 decimals
    pub average_confidence: f64,
    pub processing_time_seconds: f64,
    pub reviews_per_second: f64,
}

/// Static metadata about the rule-based detection model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_version: String,
    pub features_used: Vec<String>,
    pub accuracy_metrics: AccuracyMetrics,
    pub last_updated: DateTime<Utc>,
}

/// Placeholder accuracy figures; the rule set has no trained evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_well_formed_input() {
        let review = ReviewInput::new("A perfectly ordinary review.", 4);
        assert!(review.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_text() {
        let review = ReviewInput::new("", 3);
        assert!(matches!(review.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        for rating in [0u8, 6, 200] {
            let review = ReviewInput::new("some text", rating);
            assert!(matches!(review.validate(), Err(Error::Validation(_))));
        }
    }

    #[test]
    fn validate_rejects_oversized_text() {
        let review = ReviewInput::new("x".repeat(MAX_TEXT_LENGTH + 1), 3);
        assert!(matches!(review.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn review_input_defaults_from_json() {
        let review: ReviewInput =
            serde_json::from_str(r#"{"text": "ok product", "rating": 3}"#).unwrap();
        assert_eq!(review.reviewer_total_reviews, 0);
        assert_eq!(review.reviewer_account_age_days, 0);
        assert!(review.review_date.is_none());
    }
}
