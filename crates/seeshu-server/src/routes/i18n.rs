use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use seeshu_i18n::{Language, catalog};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_languages() -> Json<Vec<&'static str>> {
    Json(Language::ALL.iter().map(|l| l.as_str()).collect())
}

/// The full catalog for one language, as a key/value object.
pub async fn get_catalog(
    Path(language): Path<String>,
) -> Result<Json<BTreeMap<&'static str, &'static str>>, ApiError> {
    let language: Language = language
        .parse()
        .map_err(|e: seeshu_i18n::UnknownLanguage| ApiError::BadRequest(e.to_string()))?;

    let catalog: BTreeMap<_, _> = catalog::table(language).iter().copied().collect();
    Ok(Json(catalog))
}

pub async fn get_language(State(state): State<AppState>) -> Json<Language> {
    Json(state.language.read().await.language())
}

#[derive(Deserialize)]
pub struct SetLanguage {
    pub language: Language,
}

/// The one mutation path for the language preference.
pub async fn set_language(
    State(state): State<AppState>,
    Json(request): Json<SetLanguage>,
) -> Json<Language> {
    let mut prefs = state.language.write().await;
    prefs.set_language(request.language);

    tracing::info!(language = request.language.as_str(), "language changed");

    Json(prefs.language())
}
