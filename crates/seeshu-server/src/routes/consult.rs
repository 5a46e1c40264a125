use axum::Json;
use axum::extract::State;

use seeshu_triage::cough::{CoughAnalysis, CoughSample};

use crate::error::ApiError;
use crate::state::AppState;

/// Classify a recorded cough clip through the configured analyzer.
///
/// Only clip metadata crosses the wire; the audio itself never leaves the
/// recorder in this build.
pub async fn analyze_cough(
    State(state): State<AppState>,
    Json(sample): Json<CoughSample>,
) -> Result<Json<CoughAnalysis>, ApiError> {
    let analysis = state.cough.analyze(&sample)?;

    tracing::info!(
        analyzer = state.cough.id(),
        risk_level = analysis.risk_level.as_str(),
        "cough sample analyzed"
    );

    Ok(Json(analysis))
}
