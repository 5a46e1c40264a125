use serde::{Deserialize, Serialize};
use ts_rs::TS;

use seeshu_core::models::user::{User, UserRole};

use crate::error::AuthError;

/// A signed-in identity: the user record plus a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    pub user: User,
    pub access_token: String,
}

/// Sign-up details as submitted by the registration form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub password: String,
}

/// Capability interface for an identity backend.
///
/// Dyn-safe so the application holds `Arc<dyn IdentityProvider>` and the
/// mock can be swapped for a real backend without touching call sites.
pub trait IdentityProvider: Send + Sync {
    fn authenticate(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<Session, AuthError>;

    fn register(&self, new_user: NewUser) -> Result<Session, AuthError>;

    fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}
