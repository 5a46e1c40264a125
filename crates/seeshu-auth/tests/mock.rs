use seeshu_auth::error::AuthError;
use seeshu_auth::mock::MockIdentityProvider;
use seeshu_auth::provider::{IdentityProvider, NewUser};
use seeshu_core::models::user::UserRole;

#[test]
fn any_nonempty_credentials_sign_in() {
    let provider = MockIdentityProvider::new();

    let session = provider
        .authenticate("sunita@example.org", "whatever", UserRole::Asha)
        .unwrap();

    assert_eq!(session.user.email, "sunita@example.org");
    assert_eq!(session.user.role, UserRole::Asha);
    assert!(!session.access_token.is_empty());
}

#[test]
fn empty_password_is_rejected() {
    let provider = MockIdentityProvider::new();

    let result = provider.authenticate("sunita@example.org", "", UserRole::Guardian);
    assert!(matches!(
        result,
        Err(AuthError::MissingCredentials("password")),
    ));
}

#[test]
fn empty_email_is_rejected() {
    let provider = MockIdentityProvider::new();

    let result = provider.authenticate("  ", "secret", UserRole::Guardian);
    assert!(matches!(result, Err(AuthError::MissingCredentials("email"))));
}

#[test]
fn register_carries_the_submitted_fields() {
    let provider = MockIdentityProvider::new();

    let session = provider
        .register(NewUser {
            name: "Priya Kumar".to_string(),
            email: "priya@example.org".to_string(),
            phone: Some("+91 9876543210".to_string()),
            role: UserRole::Guardian,
            password: "secret".to_string(),
        })
        .unwrap();

    assert_eq!(session.user.name, "Priya Kumar");
    assert_eq!(session.user.phone.as_deref(), Some("+91 9876543210"));
    assert_eq!(session.user.role, UserRole::Guardian);
}

#[test]
fn tokens_are_unique_per_sign_in() {
    let provider = MockIdentityProvider::new();

    let a = provider
        .authenticate("a@example.org", "pw", UserRole::Doctor)
        .unwrap();
    let b = provider
        .authenticate("a@example.org", "pw", UserRole::Doctor)
        .unwrap();

    assert_ne!(a.access_token, b.access_token);
}

#[test]
fn sign_out_always_succeeds() {
    let provider = MockIdentityProvider::new();
    assert!(provider.sign_out("any-token").is_ok());
}
