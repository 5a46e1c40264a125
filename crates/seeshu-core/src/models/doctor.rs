use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DoctorStatus {
    Available,
    Busy,
    Offline,
}

/// A consulting doctor shown on the doctor-connect panel.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub hospital: String,
    pub photo_url: String,
    pub status: DoctorStatus,
    pub rating: f64,
}
