use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessment::RiskLevel;

/// The full health record behind a Baby ID tag, as shown in the records
/// viewer after a scan.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BabyProfile {
    /// Tag identifier, e.g. `BABY001`.
    pub id: String,
    pub name: String,
    pub age_days: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub blood_group: String,
    pub birth_date: jiff::civil::Date,
    pub address: String,
    pub guardian: GuardianContact,
    pub assessments: Vec<AssessmentHistoryEntry>,
    pub vaccinations: Vec<VaccinationRecord>,
    pub consultations: Vec<ConsultationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GuardianContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

/// One past assessment in a baby's record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentHistoryEntry {
    pub id: String,
    pub date: jiff::civil::Date,
    pub symptoms: Vec<String>,
    pub risk_level: RiskLevel,
    pub notes: String,
    pub assessed_by: String,
    pub facility: String,
    pub treatment: Option<String>,
    pub follow_up_date: Option<jiff::civil::Date>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VaccinationStatus {
    Completed,
    Upcoming,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VaccinationRecord {
    pub id: String,
    pub name: String,
    pub date: jiff::civil::Date,
    pub status: VaccinationStatus,
    pub batch_number: Option<String>,
    pub administered_by: Option<String>,
}

/// A doctor consultation in a baby's record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConsultationRecord {
    pub id: String,
    pub date: jiff::civil::Date,
    pub doctor_name: String,
    pub specialization: String,
    pub hospital: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
    pub follow_up_date: Option<jiff::civil::Date>,
}
