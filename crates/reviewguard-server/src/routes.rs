//! HTTP routes and handlers

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use reviewguard_core::{BatchSummary, DetectionResult, Error, ModelInfo, ReviewInput};
use reviewguard_detector::MODEL_VERSION;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/analyze/single", post(analyze_single))
        .route("/analyze/batch", post(analyze_batch))
        .route("/analyze/quick", post(quick_analyze))
        .route("/model/info", get(model_info))
        .route("/health", get(health))
        .route("/stats/demo", get(demo_stats));

    Router::new()
        .route("/", get(root))
        .route("/metrics", get(metrics))
        .nest("/api/v1", api)
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Batch analysis request
#[derive(Debug, Deserialize)]
struct BatchRequest {
    reviews: Vec<ReviewInput>,
}

/// Batch analysis response
#[derive(Debug, Serialize)]
struct BatchResponse {
    results: Vec<DetectionResult>,
    summary: BatchSummary,
}

/// Query parameters for quick analysis
#[derive(Debug, Deserialize)]
struct QuickParams {
    text: String,
    rating: u8,
}

/// Trimmed response for quick analysis
#[derive(Debug, Serialize)]
struct QuickResponse {
    is_fake: bool,
    confidence: f64,
    /// First sentence of the full explanation
    summary: String,
    /// At most three flags
    top_flags: Vec<String>,
}

/// Analyze a single review for fake indicators
async fn analyze_single(
    State(state): State<AppState>,
    Json(review): Json<ReviewInput>,
) -> Result<Json<DetectionResult>, AppError> {
    metrics::counter!("reviewguard_requests_total").increment(1);
    review.validate()?;

    let start = Instant::now();
    let mut result = state.detector.analyze(&review);
    let elapsed = start.elapsed();

    metrics::counter!("reviewguard_analyses_total").increment(1);
    metrics::histogram!("reviewguard_analysis_latency_us").record(elapsed.as_micros() as f64);
    debug!(
        fake_probability = result.fake_probability,
        is_fake = result.is_fake,
        "analyzed single review"
    );

    // Processing time annotation, useful for monitoring
    result
        .explanation
        .push_str(&format!(" (Analysis took {:.3}s)", elapsed.as_secs_f64()));

    Ok(Json(result))
}

/// Analyze up to `max_batch_size` reviews in one request
async fn analyze_batch(
    State(state): State<AppState>,
    Json(batch): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    metrics::counter!("reviewguard_requests_total").increment(1);

    if batch.reviews.is_empty() {
        return Err(AppError::InvalidRequest(
            "batch must contain at least one review".to_string(),
        ));
    }
    if batch.reviews.len() > state.config.max_batch_size {
        warn!(
            count = batch.reviews.len(),
            "rejecting oversized batch request"
        );
        return Err(AppError::InvalidRequest(format!(
            "too many reviews: maximum {} per batch",
            state.config.max_batch_size
        )));
    }
    for (i, review) in batch.reviews.iter().enumerate() {
        review
            .validate()
            .map_err(|e| AppError::InvalidRequest(format!("review {i}: {e}")))?;
    }

    let start = Instant::now();
    let results = state.detector.analyze_batch(&batch.reviews);
    let elapsed = start.elapsed().as_secs_f64();

    metrics::counter!("reviewguard_analyses_total").increment(results.len() as u64);

    let summary = summarize(&results, elapsed);
    info!(
        total = summary.total_reviews,
        fake = summary.fake_reviews_detected,
        "batch analysis complete"
    );

    Ok(Json(BatchResponse { results, summary }))
}

/// Quick analysis from text + rating query parameters
async fn quick_analyze(
    State(state): State<AppState>,
    Query(params): Query<QuickParams>,
) -> Result<Json<QuickResponse>, AppError> {
    metrics::counter!("reviewguard_requests_total").increment(1);

    if !(1..=5).contains(&params.rating) {
        return Err(AppError::InvalidRequest(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    let review = ReviewInput::new(params.text, params.rating);
    review.validate()?;

    let result = state.detector.analyze(&review);
    metrics::counter!("reviewguard_analyses_total").increment(1);

    let summary = result
        .explanation
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string();

    Ok(Json(QuickResponse {
        is_fake: result.is_fake,
        confidence: result.confidence_score,
        summary,
        top_flags: result.flags.into_iter().take(3).collect(),
    }))
}

/// Static metadata about the detection model
async fn model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.detector.model_info())
}

/// Liveness check
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "model_version": MODEL_VERSION,
        "service": "reviewguard",
    }))
}

/// Illustrative platform statistics, not derived from real traffic
async fn demo_stats() -> Json<serde_json::Value> {
    Json(json!({
        "platform_stats": {
            "total_reviews_analyzed": 50000,
            "fake_reviews_detected": 8500,
            "fake_percentage": 17.0,
            "accuracy_rate": 82.5,
        },
        "common_fake_indicators": [
            "Excessive positive language",
            "New reviewer accounts",
            "Sentiment-rating mismatch",
            "Generic/template-like text",
            "Suspicious timing patterns",
        ],
        "detection_performance": {
            "avg_processing_time_ms": 45,
            "throughput_per_minute": 1300,
            "false_positive_rate": 12.0,
            "false_negative_rate": 8.0,
        },
    }))
}

/// API information document
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "ReviewGuard API",
        "version": MODEL_VERSION,
        "description": "Heuristic fake review detection for e-commerce platforms",
        "endpoints": {
            "health": "/api/v1/health",
            "analyze_single": "/api/v1/analyze/single",
            "analyze_batch": "/api/v1/analyze/batch",
            "analyze_quick": "/api/v1/analyze/quick",
            "model_info": "/api/v1/model/info",
            "demo_stats": "/api/v1/stats/demo",
        },
        "features": [
            "Text pattern analysis",
            "Sentiment-rating correlation",
            "Reviewer behavior analysis",
            "Temporal pattern detection",
            "Batch processing support",
        ],
    }))
}

/// Render Prometheus metrics
async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

async fn fallback(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Endpoint not found", "path": uri.to_string() })),
    )
}

/// Aggregate batch statistics; owned by the API layer, not the detector
fn summarize(results: &[DetectionResult], elapsed_seconds: f64) -> BatchSummary {
    let total_reviews = results.len();
    let fake_reviews_detected = results.iter().filter(|r| r.is_fake).count();
    let average_confidence =
        results.iter().map(|r| r.confidence_score).sum::<f64>() / total_reviews as f64;

    BatchSummary {
        total_reviews,
        fake_reviews_detected,
        fake_percentage: fake_reviews_detected as f64 / total_reviews as f64 * 100.0,
        average_confidence: round_to(average_confidence, 2),
        processing_time_seconds: round_to(elapsed_seconds, 3),
        reviews_per_second: round_to(total_reviews as f64 / elapsed_seconds.max(f64::EPSILON), 2),
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    InvalidRequest(String),
    Internal(String),
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(msg) => AppError::InvalidRequest(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request_error", msg)
            }
            AppError::Internal(msg) => {
                // Do not leak internals beyond the message string
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "type": kind,
            }
        });

        (status, Json(body)).into_response()
    }
}
