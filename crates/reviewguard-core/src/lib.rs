//! ReviewGuard Core
//!
//! Types and error handling shared across ReviewGuard components.
//!
//! This crate provides:
//! - Review input and detection result types used on the wire
//! - Error types and result handling
//! - Platform limits (text length, batch size)

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    AccuracyMetrics, BatchSummary, DetectionResult, ModelInfo, ReviewInput, MAX_BATCH_SIZE,
    MAX_TEXT_LENGTH,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{BatchSummary, DetectionResult, ModelInfo, ReviewInput};
}
