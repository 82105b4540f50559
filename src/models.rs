//! # Wire Types
//!
//! Defines the JSON types exchanged with the Versus backend:
//! - Authentication (signup/login responses, identity)
//! - Polls ("versus" questionnaires with two options and vote tallies)
//! - Title decryption responses
//! - Search results from the proxied anime search collaborator
//!
//! Poll titles are encrypted server-side. The wire `title` field is only
//! populated by the decrypt endpoint; list/get responses carry a masked
//! variant that is always safe to display.

use serde::{Deserialize, Serialize};

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// The authenticated user as reported by the backend or reconstructed from
/// a persisted token at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: u64,
    pub email: String,
    /// ISO-8601 creation timestamp; absent when reconstructed from a token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Response to `POST /auth/signup` and `POST /auth/login`.
///
/// # Fields
/// - `user`: The account that was created or logged in
/// - `access_token`: Opaque bearer token for subsequent requests
/// - `decryption_code`: 8-character code used to reveal poll titles
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: Identity,
    pub access_token: String,
    pub decryption_code: String,
}

// ============================================================================
// POLLS
// ============================================================================

/// One side of a binary poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersusOption {
    pub text: String,
    #[serde(default)]
    pub votes: u64,
    /// Share of the total vote, 0..=100; 0 when the poll has no votes
    #[serde(default)]
    pub percentage: u64,
}

/// A binary "A vs B" poll.
///
/// The plaintext `title` is never populated by list/get endpoints; it only
/// exists transiently in decrypt responses. `title_masked` (e.g.
/// `"Na**********"`) is the displayable placeholder the server always
/// provides for encrypted titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Versus {
    pub id: u64,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_masked: Option<String>,
    #[serde(default)]
    pub is_encrypted: bool,
    pub option_a: VersusOption,
    pub option_b: VersusOption,
    #[serde(default)]
    pub total_votes: u64,
}

/// The voter's pick on a binary poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    A,
    B,
}

impl std::str::FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Choice::A),
            "b" => Ok(Choice::B),
            other => Err(format!("expected 'a' or 'b', got '{}'", other)),
        }
    }
}

impl Versus {
    /// The placeholder shown when no decrypted title is available. Falls
    /// back to a literal `***` if the server sent no masked variant.
    pub fn masked_label(&self) -> &str {
        self.title_masked.as_deref().unwrap_or("***")
    }

    /// Record one vote for the given option.
    ///
    /// Votes, percentages and the total mutate together; callers never see
    /// a poll where the tally and the percentages disagree.
    pub fn record_vote(&mut self, choice: Choice) {
        match choice {
            Choice::A => self.option_a.votes += 1,
            Choice::B => self.option_b.votes += 1,
        }
        self.total_votes = self.option_a.votes + self.option_b.votes;
        self.recompute_percentages();
    }

    /// Recompute both percentages from the raw tallies.
    ///
    /// Both are 0 when there are no votes. Otherwise A gets the rounded
    /// share and B the remainder, so the two always sum to exactly 100.
    pub fn recompute_percentages(&mut self) {
        if self.total_votes == 0 {
            self.option_a.percentage = 0;
            self.option_b.percentage = 0;
            return;
        }
        let a = (self.option_a.votes * 100 + self.total_votes / 2) / self.total_votes;
        self.option_a.percentage = a;
        self.option_b.percentage = 100 - a;
    }
}

/// Response to `POST /jeu/:id/decrypt`.
///
/// `success: true` with a present `title` is the only combination that
/// reveals a plaintext title. Anything else leaves the poll masked.
#[derive(Debug, Clone, Deserialize)]
pub struct DecryptResponse {
    pub success: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// SEARCH COLLABORATOR
// ============================================================================

/// One result from the proxied anime search, used to pick option labels
/// when authoring a poll.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Response to `GET /jikan/search?q=`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub pagination: Option<serde_json::Value>,
    #[serde(default)]
    pub data: Vec<SearchHit>,
}

impl SearchResponse {
    /// The empty result returned without a network call for blank queries.
    pub fn empty() -> Self {
        Self {
            pagination: None,
            data: Vec::new(),
        }
    }
}
