use tracing::info;
use uuid::Uuid;

use seeshu_core::models::user::{User, UserRole};

use crate::error::AuthError;
use crate::provider::{IdentityProvider, NewUser, Session};

/// Identity provider that fabricates users.
///
/// Any non-empty credentials sign in; the password is never checked and
/// nothing is stored. Tokens are fresh UUIDs with no registry behind them,
/// so `sign_out` has nothing to revoke.
pub struct MockIdentityProvider;

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn authenticate(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<Session, AuthError> {
        if email.trim().is_empty() {
            return Err(AuthError::MissingCredentials("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingCredentials("password"));
        }

        info!(email = email, "mock sign-in");

        Ok(Session {
            user: User {
                id: Uuid::new_v4(),
                name: "Test User".to_string(),
                email: email.to_string(),
                role,
                phone: None,
            },
            access_token: Uuid::new_v4().to_string(),
        })
    }

    fn register(&self, new_user: NewUser) -> Result<Session, AuthError> {
        if new_user.email.trim().is_empty() {
            return Err(AuthError::MissingCredentials("email"));
        }
        if new_user.password.is_empty() {
            return Err(AuthError::MissingCredentials("password"));
        }

        info!(email = new_user.email, "mock sign-up");

        Ok(Session {
            user: User {
                id: Uuid::new_v4(),
                name: new_user.name,
                email: new_user.email,
                role: new_user.role,
                phone: new_user.phone,
            },
            access_token: Uuid::new_v4().to_string(),
        })
    }

    fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        Ok(())
    }
}
