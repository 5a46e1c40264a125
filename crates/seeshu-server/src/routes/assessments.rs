use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use seeshu_core::models::assessment::AssessmentRecord;
use seeshu_core::models::observation::ClinicalObservation;
use seeshu_triage::pneumonia::PneumoniaRiskScorer;

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessment {
    pub patient_name: String,
    pub baby_id: Option<String>,
    pub observation: ClinicalObservation,
}

/// Score one assessment submission.
///
/// Vitals are range-checked here, at the boundary — the scorer itself is
/// total and never fails. The record is freshly constructed and returned to
/// the caller; nothing is stored.
pub async fn submit_assessment(
    Json(submission): Json<SubmitAssessment>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    if submission.patient_name.trim().is_empty() {
        return Err(ApiError::BadRequest("patient name is empty".to_string()));
    }
    submission.observation.validate()?;

    let scorer = PneumoniaRiskScorer;
    let result = scorer.score(&submission.observation);

    tracing::info!(
        scorer = scorer.id(),
        patient = %submission.patient_name,
        risk_level = result.risk_level.as_str(),
        risk_score = result.risk_score,
        "assessment scored"
    );

    Ok(Json(AssessmentRecord {
        id: Uuid::new_v4(),
        patient_name: submission.patient_name,
        baby_id: submission.baby_id,
        observation: submission.observation,
        result,
        created_at: jiff::Timestamp::now(),
    }))
}
