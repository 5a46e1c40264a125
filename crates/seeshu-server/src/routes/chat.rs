use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use seeshu_relay::context::{AssessmentContext, build_context_block};
use seeshu_relay::guardian;

use crate::error::ApiError;
use crate::state::AppState;

/// Reply sent when the upstream call fails, with a 500 status. The
/// front-end chat widget renders this body as-is.
const FAILURE_REPLY: &str = "Sorry, I couldn't process your request.";

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Recent assessment summaries to fold into the system prompt.
    #[serde(default)]
    pub context: Vec<AssessmentContext>,
}

#[derive(Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Forward one message to the configured completion API and relay the text
/// reply. Upstream failure keeps the `{reply}` body shape so the widget
/// never has to branch on the error envelope.
pub async fn relay_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ChatReply>)> {
    let context_block = build_context_block(&request.context);
    let context = (!context_block.is_empty()).then_some(context_block.as_str());

    match state.relay.relay(&request.message, context).await {
        Ok(reply) => Ok(Json(ChatReply { reply })),
        Err(e) => {
            tracing::error!("chat relay failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatReply {
                    reply: FAILURE_REPLY.to_string(),
                }),
            ))
        }
    }
}

/// The offline Guardian responder: deterministic keyword-rule reply, no
/// upstream involved.
pub async fn guardian_chat(
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message is empty".to_string()));
    }

    Ok(Json(ChatReply {
        reply: guardian::respond(&request.message).to_string(),
    }))
}
