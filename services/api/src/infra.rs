use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::config::StoreConfig;
use receipt_points::error::AppError;
use receipt_points::receipts::{InMemoryScoreStore, ReceiptSubmission, UuidGenerator};
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn score_store(config: &StoreConfig) -> InMemoryScoreStore {
    InMemoryScoreStore::with_generator(UuidGenerator, config.id_attempts)
}

/// Read and decode a receipt JSON document from disk.
pub(crate) fn read_submission(path: &Path) -> Result<ReceiptSubmission, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
