//! Shared application state

use metrics_exporter_prometheus::PrometheusHandle;
use reviewguard_detector::Detector;
use std::sync::Arc;

use crate::config::ServerConfig;

/// State shared across request handlers.
///
/// Everything here is read-only after startup; handlers never take locks.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<Detector>,
    pub config: Arc<ServerConfig>,
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    pub fn new(config: ServerConfig, metrics_handle: PrometheusHandle) -> Self {
        Self {
            detector: Arc::new(Detector::new()),
            config: Arc::new(config),
            metrics_handle,
        }
    }
}
