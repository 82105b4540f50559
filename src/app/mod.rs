//! # Application State and Views
//!
//! [`App`] is the explicitly owned session context: configuration,
//! credential store, typed API clients, the optional identity, and the one
//! disclosure engine every view shares. It is constructed once at startup
//! and passed to the view functions; there are no ambient singletons.
//!
//! The views mirror the product surfaces:
//! - [`catalog`]: poll list with disclosure-safe titles
//! - [`detail`]: a single poll plus voting
//! - [`results`]: aggregated outcome rendering
//! - [`authoring`]: drafting and submitting a new poll
//! - [`profile`]: identity, stored code, logout

pub mod authoring;
pub mod catalog;
pub mod detail;
pub mod profile;
pub mod results;

use anyhow::Result;
use std::sync::Arc;

use crate::api::{self, AuthError, PollApi, SearchApi};
use crate::auth::{bootstrap_identity, CredentialStore};
use crate::common::config::AppConfig;
use crate::disclosure::DisclosureEngine;
use crate::gateway::Gateway;
use crate::models::{AuthResponse, Identity};

/// Owned session context, created once and passed to every view.
pub struct App {
    pub config: AppConfig,
    pub credentials: Arc<CredentialStore>,
    gateway: Gateway,
    pub polls: PollApi,
    pub search: SearchApi,
    /// Present after login/registration or token reconstruction; absent
    /// means logged out. Display-only until the server re-validates.
    pub identity: Option<Identity>,
    /// Shared per-poll title disclosure state.
    pub disclosure: DisclosureEngine,
}

impl App {
    /// Build the context from configuration and reconstruct the session
    /// from persisted credentials. No network I/O happens here.
    pub fn bootstrap(config: AppConfig) -> Result<Self> {
        let credentials = Arc::new(CredentialStore::new(&config.credentials_path));
        let gateway = Gateway::new(&config, credentials.clone());
        let identity = bootstrap_identity(&credentials);

        Ok(Self {
            polls: PollApi::new(gateway.clone()),
            search: SearchApi::new(gateway.clone()),
            gateway,
            config,
            credentials,
            identity,
            disclosure: DisclosureEngine::new(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    /// Log in and adopt the returned identity.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let response = api::auth::login(&self.gateway, &self.credentials, email, password).await?;
        self.identity = Some(response.user.clone());
        Ok(response)
    }

    /// Register and adopt the returned identity.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, AuthError> {
        let response =
            api::auth::register(&self.gateway, &self.credentials, email, password).await?;
        self.identity = Some(response.user.clone());
        Ok(response)
    }

    /// Drop the session: secrets cleared from the store, identity gone.
    pub fn logout(&mut self) {
        api::auth::logout(&self.credentials);
        self.identity = None;
    }
}
