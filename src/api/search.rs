//! # Search Collaborator
//!
//! Anime search proxied by the backend (`/jikan/*`), used to pick option
//! labels while authoring a poll. The collaborator is external; this
//! module only shapes requests and responses.

use crate::gateway::{Gateway, GatewayError};
use crate::models::{SearchHit, SearchResponse};

#[derive(Debug, Clone)]
pub struct SearchApi {
    gateway: Gateway,
}

impl SearchApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Keyword search. `GET /jikan/search?q=`. A blank query returns an
    /// empty result without touching the network.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, GatewayError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResponse::empty());
        }
        self.gateway
            .get_json_with_query("/jikan/search", &[("q", query)])
            .await
    }

    /// One search result by id. `GET /jikan/:id`.
    pub async fn get(&self, id: u64) -> Result<SearchHit, GatewayError> {
        self.gateway.get_json(&format!("/jikan/{}", id)).await
    }
}
