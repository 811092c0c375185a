//! ReviewGuard Detector
//!
//! Heuristic fake review detection: feature extraction over review text and
//! reviewer metadata, regex-based fake-pattern matching, and a fixed-weight
//! rule combiner producing an explainable verdict.
//!
//! The whole pipeline is synchronous and side-effect free; a [`Detector`] is
//! built once at startup and shared read-only across requests.

pub mod detector;
pub mod features;
pub mod patterns;
pub mod sentiment;
pub mod stopwords;

pub use detector::{Detector, DetectorWeights, MODEL_VERSION};
pub use features::{FeatureExtractor, FeatureSet, TemporalFeatures};
pub use patterns::check_fake_patterns;
pub use sentiment::{
    default_analyzer, FallbackAnalyzer, LexiconAnalyzer, SentimentAnalyzer, SentimentScores,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::detector::{Detector, DetectorWeights};
    pub use crate::features::{FeatureExtractor, FeatureSet};
    pub use crate::sentiment::{SentimentAnalyzer, SentimentScores};
}
