use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FacilityKind {
    Hospital,
    Phc,
    Chc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FacilityAvailability {
    Available,
    Limited,
    Full,
}

/// A nearby care facility listed on the emergency page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub kind: FacilityKind,
    pub distance_km: f64,
    pub phone: String,
    pub address: String,
    pub services: Vec<String>,
    pub availability: FacilityAvailability,
}
