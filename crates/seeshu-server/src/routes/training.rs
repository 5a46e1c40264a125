use axum::Json;
use axum::extract::Path;

use seeshu_core::models::training::TrainingModule;
use seeshu_registry::training;

use crate::error::ApiError;

pub async fn list_modules() -> Json<Vec<TrainingModule>> {
    Json(training::all_modules())
}

pub async fn get_module(Path(id): Path<String>) -> Result<Json<TrainingModule>, ApiError> {
    let module = training::get_module(&id)?;
    Ok(Json(module))
}
