//! # Session Bootstrap
//!
//! Reconstructs an in-memory [`Identity`] from a previously persisted token
//! at startup, without any network round trip.
//!
//! The token is a JWT whose payload segment is self-describing. Only the
//! payload is decoded here; the signature is NOT verified client-side.
//! This reconstruction is advisory, for display bootstrap only — every
//! privileged operation is re-validated server-side when the token is sent
//! as a bearer header. A token that fails to decode is treated as invalid:
//! it is cleared from the store and the client starts logged out.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use log::{info, warn};
use serde::Deserialize;

use crate::auth::credentials::CredentialStore;
use crate::models::Identity;

/// The claims we need from the token payload. Anything else is ignored.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    /// Subject: the user id
    sub: u64,
    email: String,
}

/// Attempt to rebuild the authenticated identity from the persisted token.
///
/// Never blocks on I/O beyond the credential store's own file read and
/// never propagates a decode failure: a malformed token results in a clean
/// logged-out state with the bad token removed from durable storage.
pub fn bootstrap_identity(store: &CredentialStore) -> Option<Identity> {
    let token = store.token()?;

    match decode_claims(&token) {
        Some(claims) => {
            info!("session restored for {}", claims.email);
            Some(Identity {
                id: claims.sub,
                email: claims.email,
                created_at: None,
            })
        }
        None => {
            warn!("persisted token is malformed, clearing it");
            store.set_token(None);
            None
        }
    }
}

/// Decode the middle (payload) segment of a JWT. Returns `None` on any
/// structural problem: wrong segment count, bad base64, bad JSON, missing
/// claims.
fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}
