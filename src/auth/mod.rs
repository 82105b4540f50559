//! # Authentication State
//!
//! Client-held credentials and session reconstruction:
//!
//! ## Credential Store ([`credentials`])
//! Owns the two secrets (bearer token, decryption code) and keeps the
//! in-memory cache and the durable file in sync.
//!
//! ## Session Bootstrap ([`session`])
//! Rebuilds a display-only identity from the persisted token at startup,
//! clearing tokens that fail to decode.

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::bootstrap_identity;
