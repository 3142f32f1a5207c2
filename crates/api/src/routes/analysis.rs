//! Analysis Routes

use axum::{body::Bytes, extract::State, Json};
use feature_engine::{FeatureExtractor, FeatureReport};
use std::sync::Arc;
use tracing::info;
use voltage_ingest::load_series;

use crate::error::ApiError;
use crate::AppState;

/// Analyse an uploaded CSV table.
///
/// The body is the raw CSV. Parsing and feature extraction run on the
/// blocking pool; the upload is dropped once the report is built.
pub async fn analyze(
    State(_state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<FeatureReport>, ApiError> {
    let upload_bytes = body.len();

    let report = tokio::task::spawn_blocking(move || {
        let series = load_series(body.as_ref())?;
        Ok::<_, ApiError>(FeatureExtractor::new().extract(&series))
    })
    .await??;

    info!(
        "Analysed upload: {} bytes, {} rows, {} peaks, {} lows, {} below threshold",
        upload_bytes,
        report.row_count,
        report.peaks.len(),
        report.lows.len(),
        report.below_threshold.len()
    );

    Ok(Json(report))
}
