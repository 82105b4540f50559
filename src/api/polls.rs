//! # Poll Endpoints
//!
//! Typed wrappers over `/jeu`: list, fetch, create, and title decryption.
//! Everything comes back with masked titles; the only way to a plaintext
//! title is the decrypt endpoint, and its result belongs to the
//! disclosure engine, not to these DTOs.

use async_trait::async_trait;
use serde::Serialize;

use crate::common::validation::normalize_code;
use crate::disclosure::DecryptBackend;
use crate::gateway::{Gateway, GatewayError};
use crate::models::{DecryptResponse, Versus};

/// Poll service client.
#[derive(Debug, Clone)]
pub struct PollApi {
    gateway: Gateway,
}

#[derive(Serialize)]
struct CreateBody<'a> {
    nom: &'a str,
}

#[derive(Serialize)]
struct DecryptBody {
    code: String,
}

impl PollApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// All polls, masked. `GET /jeu`.
    pub async fn list(&self) -> Result<Vec<Versus>, GatewayError> {
        self.gateway.get_json("/jeu").await
    }

    /// One poll, masked. `GET /jeu/:id`; a 404 is a regular `None`, every
    /// other failure propagates.
    pub async fn get(&self, id: u64) -> Result<Option<Versus>, GatewayError> {
        match self.gateway.get_json(&format!("/jeu/{}", id)).await {
            Ok(poll) => Ok(Some(poll)),
            Err(GatewayError::ClientRequest { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create a poll. `POST /jeu`, auth required. The server encrypts the
    /// title and assigns the id; the response carries only the masked
    /// title.
    pub async fn create(&self, title: &str) -> Result<Versus, GatewayError> {
        self.gateway
            .post_json("/jeu", &CreateBody { nom: title })
            .await
    }

    /// Ask the server to decrypt one poll's title with a code.
    /// `POST /jeu/:id/decrypt`. The code goes over the wire uppercased.
    pub async fn decrypt_title(
        &self,
        id: u64,
        code: &str,
    ) -> Result<DecryptResponse, GatewayError> {
        self.gateway
            .post_json(
                &format!("/jeu/{}/decrypt", id),
                &DecryptBody {
                    code: normalize_code(code),
                },
            )
            .await
    }
}

#[async_trait]
impl DecryptBackend for PollApi {
    async fn decrypt_title(
        &self,
        poll_id: u64,
        code: &str,
    ) -> Result<DecryptResponse, GatewayError> {
        PollApi::decrypt_title(self, poll_id, code).await
    }
}
