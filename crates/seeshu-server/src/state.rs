use std::sync::Arc;

use tokio::sync::RwLock;

use seeshu_auth::provider::IdentityProvider;
use seeshu_i18n::LanguagePreference;
use seeshu_relay::chat::ChatRelay;
use seeshu_triage::CoughAnalyzer;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The identity provider and cough analyzer sit behind trait objects so the
/// mock implementations wired up in `main` can be replaced without touching
/// the handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
    pub identity: Arc<dyn IdentityProvider>,
    pub cough: Arc<dyn CoughAnalyzer>,
    pub language: Arc<RwLock<LanguagePreference>>,
}
