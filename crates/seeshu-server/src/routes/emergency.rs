use axum::Json;
use serde::Serialize;

use seeshu_core::models::facility::Facility;
use seeshu_registry::facilities;

pub async fn list_facilities() -> Json<Vec<Facility>> {
    Json(facilities::all_facilities())
}

#[derive(Serialize)]
pub struct SosResponse {
    pub activated: bool,
    pub facilities: Vec<Facility>,
}

/// Activate the SOS flow: no dispatch happens — the response carries the
/// nearby-facility list for the caller to act on.
pub async fn activate_sos() -> Json<SosResponse> {
    tracing::warn!("SOS activated");

    Json(SosResponse {
        activated: true,
        facilities: facilities::all_facilities(),
    })
}
