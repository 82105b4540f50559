//! # Backend Gateway
//!
//! Uniform request execution for every call to the poll/auth backend:
//! auth headers attached from the credential store, caching disabled, a
//! hard deadline on the whole exchange, and failures normalized into the
//! [`GatewayError`] taxonomy.

pub mod error;

pub use error::GatewayError;

use log::{debug, warn};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::CredentialStore;
use crate::common::config::AppConfig;

/// Typed request/response wrapper shared by all API modules.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<CredentialStore>,
    timeout: Duration,
}

impl Gateway {
    pub fn new(config: &AppConfig, credentials: Arc<CredentialStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            credentials,
            timeout: Duration::from_millis(config.request_timeout_ms),
        }
    }

    /// GET `path` and deserialize the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.request(Method::GET, path, &[], None::<&()>).await
    }

    /// GET `path` with query parameters (URL-encoded by the HTTP client).
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    /// POST `body` as JSON to `path` and deserialize the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Execute one request with the gateway's deadline and error
    /// normalization.
    ///
    /// The deadline covers the whole exchange, response body included; on
    /// expiry the in-flight request is dropped and [`GatewayError::Timeout`]
    /// is returned.
    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method, &url)
            .header("Cache-Control", "no-store");
        if !query.is_empty() {
            builder = builder.query(query);
        }
        for (name, value) in self.credentials.auth_headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let exchange = async {
            let response = builder.send().await.map_err(|e| {
                warn!("request to {} failed: {}", url, e);
                GatewayError::Network
            })?;

            let status = response.status().as_u16();
            if !response.status().is_success() {
                // A failed body parse is the same as no body: the
                // status-class fallback message applies.
                let error_body: Option<Value> = response.json().await.ok();
                return Err(error::error_for_status(status, error_body.as_ref()));
            }

            response.json::<T>().await.map_err(|e| {
                warn!("unreadable response body from {}: {}", url, e);
                GatewayError::Server
            })
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout),
        }
    }
}
