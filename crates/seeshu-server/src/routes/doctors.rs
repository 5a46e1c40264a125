use axum::Json;

use seeshu_core::models::doctor::Doctor;
use seeshu_registry::doctors;

pub async fn list_doctors() -> Json<Vec<Doctor>> {
    Json(doctors::all_doctors())
}
