use axum::Json;
use axum::extract::Path;

use seeshu_core::models::baby::BabyProfile;
use seeshu_registry::babies;

use crate::error::ApiError;

pub async fn get_baby(Path(id): Path<String>) -> Result<Json<BabyProfile>, ApiError> {
    let baby = babies::get_baby(&id)?;
    Ok(Json(baby))
}

/// The simulated QR/NFC scan: always resolves to the demo tag so the
/// assessment wizard can auto-fill the patient details.
pub async fn scan_baby() -> Json<BabyProfile> {
    Json(babies::scan_baby())
}
