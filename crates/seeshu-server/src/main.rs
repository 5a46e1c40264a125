use std::env;
use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use seeshu_auth::mock::MockIdentityProvider;
use seeshu_i18n::LanguagePreference;
use seeshu_relay::chat::{ChatRelay, RelayConfig};
use seeshu_triage::cough::FakeAudioRiskOracle;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bind = env::var("SEESHU_BIND").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    let relay_config = RelayConfig {
        api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
        base_url: env::var("SEESHU_CHAT_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com".to_string()),
        model: env::var("SEESHU_CHAT_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
    };

    let state = AppState {
        relay: Arc::new(ChatRelay::new(relay_config)),
        identity: Arc::new(MockIdentityProvider::new()),
        cough: Arc::new(FakeAudioRiskOracle),
        language: Arc::new(RwLock::new(LanguagePreference::new())),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Chat relay + offline responder
        .route("/chat", post(routes::chat::relay_chat))
        .route("/chat/guardian", post(routes::chat::guardian_chat))
        // Assessment wizard
        .route("/assessments", post(routes::assessments::submit_assessment))
        // Cough consultation
        .route("/consult/cough", post(routes::consult::analyze_cough))
        // Mock identity
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/signup", post(routes::auth::signup))
        .route("/auth/logout", post(routes::auth::logout))
        // Baby ID + records viewer
        .route("/babies/scan", post(routes::babies::scan_baby))
        .route("/babies/{id}", get(routes::babies::get_baby))
        // Directories
        .route("/doctors", get(routes::doctors::list_doctors))
        .route("/facilities", get(routes::emergency::list_facilities))
        .route("/emergency/sos", post(routes::emergency::activate_sos))
        // Training hub
        .route("/training/modules", get(routes::training::list_modules))
        .route("/training/modules/{id}", get(routes::training::get_module))
        // Language preference + catalogs
        .route("/i18n/languages", get(routes::i18n::list_languages))
        .route(
            "/i18n/language",
            get(routes::i18n::get_language).put(routes::i18n::set_language),
        )
        .route("/i18n/{language}", get(routes::i18n::get_catalog))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(addr = %bind, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
