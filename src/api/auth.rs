//! # Auth Endpoints
//!
//! Signup, login and logout against `/auth/*`. These are the only writers
//! of the credential store: a successful response stores the bearer token
//! and the decryption code together, logout clears both.

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::auth::CredentialStore;
use crate::common::validation::{
    normalize_email, validate_email, validate_login_password, validate_registration_password,
    ValidationError,
};
use crate::gateway::{Gateway, GatewayError};
use crate::models::AuthResponse;

/// Failure of an auth flow: caught at the input boundary or normalized by
/// the gateway. Validation failures never produce a network call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Create an account. On success the token and decryption code are
/// persisted and the full response (including the code to show the user
/// once) is returned.
pub async fn register(
    gateway: &Gateway,
    store: &CredentialStore,
    email: &str,
    password: &str,
) -> Result<AuthResponse, AuthError> {
    let email = normalize_email(email);
    validate_email(&email)?;
    validate_registration_password(password)?;

    let response: AuthResponse = gateway
        .post_json(
            "/auth/signup",
            &CredentialsBody {
                email: &email,
                password,
            },
        )
        .await?;

    adopt(store, &response);
    info!("registered {}", response.user.email);
    Ok(response)
}

/// Log into an existing account. Same persistence behavior as
/// [`register`]; login only checks that a password is present, strength
/// was enforced when the account was created.
pub async fn login(
    gateway: &Gateway,
    store: &CredentialStore,
    email: &str,
    password: &str,
) -> Result<AuthResponse, AuthError> {
    let email = normalize_email(email);
    validate_email(&email)?;
    validate_login_password(password)?;

    let response: AuthResponse = gateway
        .post_json(
            "/auth/login",
            &CredentialsBody {
                email: &email,
                password,
            },
        )
        .await?;

    adopt(store, &response);
    info!("logged in as {}", response.user.email);
    Ok(response)
}

/// Forget both secrets. Purely local; the server keeps no session.
pub fn logout(store: &CredentialStore) {
    store.set_token(None);
    store.set_code(None);
    info!("logged out");
}

fn adopt(store: &CredentialStore, response: &AuthResponse) {
    store.set_token(Some(response.access_token.clone()));
    store.set_code(Some(response.decryption_code.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::AppConfig;
    use std::sync::Arc;

    fn fixtures(dir: &tempfile::TempDir) -> (Gateway, Arc<CredentialStore>) {
        let store = Arc::new(CredentialStore::new(dir.path().join("credentials.json")));
        let gateway = Gateway::new(&AppConfig::default(), store.clone());
        (gateway, store)
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_login_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        let (gateway, store) = fixtures(&dir);

        // Returns immediately; a network attempt against the default local
        // URL would surface as a Gateway variant instead.
        let err = login(&gateway, &store, "not-an-email", "whatever")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Invalid(_)));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_registration() {
        let dir = tempfile::tempdir().unwrap();
        let (gateway, store) = fixtures(&dir);

        let err = register(&gateway, &store, "not-an-email", "Str0ngPass")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_weak_password_blocks_registration_with_full_detail() {
        let dir = tempfile::tempdir().unwrap();
        let (gateway, store) = fixtures(&dir);

        let err = register(&gateway, &store, "user@example.com", "short1")
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("at least 8 characters"));
        assert!(message.contains("an uppercase letter"));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_empty_password_blocks_login() {
        let dir = tempfile::tempdir().unwrap();
        let (gateway, store) = fixtures(&dir);

        let err = login(&gateway, &store, "user@example.com", "")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Invalid(_)));
    }

    #[test]
    fn test_logout_clears_both_secrets() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("credentials.json"));
        store.set_token(Some("tok".to_string()));
        store.set_code(Some("AB12CD34".to_string()));

        logout(&store);

        assert_eq!(store.token(), None);
        assert_eq!(store.code(), None);
    }
}
