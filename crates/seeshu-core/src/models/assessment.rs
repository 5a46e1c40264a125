use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::observation::ClinicalObservation;

/// Coarse risk band. The wire form (`low`/`moderate`/`high`) is a contract
/// with the front-end, which keys its color coding off these exact strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }

    /// The care-seeking timeframe implied by this band. Always a direct
    /// mapping — no input combination can produce a mismatch.
    pub fn urgency(&self) -> Urgency {
        match self {
            RiskLevel::High => Urgency::Immediate,
            RiskLevel::Moderate => Urgency::Within24Hours,
            RiskLevel::Low => Urgency::Monitor,
        }
    }
}

/// Care-seeking timeframe. Serializes as `immediate`/`within24hours`/
/// `monitor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Urgency {
    Immediate,
    Within24Hours,
    Monitor,
}

/// Result of one scoring call, freshly constructed each time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub confidence: u8,
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub urgency: Urgency,
    pub explanation: String,
}

/// Envelope returned to the assessment wizard: the inputs as submitted plus
/// the scored result. Not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub patient_name: String,
    pub baby_id: Option<String>,
    pub observation: ClinicalObservation,
    pub result: RiskAssessment,
    pub created_at: jiff::Timestamp,
}
