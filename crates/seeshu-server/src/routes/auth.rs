use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use seeshu_auth::provider::{NewUser, Session};
use seeshu_core::models::user::UserRole;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub access_token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Session>, ApiError> {
    let session = state
        .identity
        .authenticate(&request.email, &request.password, request.role)?;
    Ok(Json(session))
}

pub async fn signup(
    State(state): State<AppState>,
    Json(new_user): Json<NewUser>,
) -> Result<Json<Session>, ApiError> {
    let session = state.identity.register(new_user)?;
    Ok(Json(session))
}

pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<LogoutRequest>,
) -> Result<Json<()>, ApiError> {
    state.identity.sign_out(&request.access_token)?;
    Ok(Json(()))
}
