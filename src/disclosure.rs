//! # Title Disclosure Engine
//!
//! Poll titles are stored encrypted server-side and arrive masked. This
//! module owns the per-poll state machine that governs when a plaintext
//! title may be displayed:
//!
//! ```text
//! Masked ──submit──▶ Submitting ──success──▶ Revealed   (terminal)
//!   ▲                    │
//!   └────── failure ─────┘   (error attached, retry allowed)
//! ```
//!
//! One engine instance is shared by every view that renders polls, keyed
//! by poll id. That is what guarantees no cross-poll leakage: a revealed
//! title is cached for exactly the poll it was requested for and is never
//! applied anywhere else, even if the same code would work there too.
//!
//! Submission is split into [`DisclosureEngine::begin_submit`] (validation
//! and the in-flight guard) and [`DisclosureEngine::apply_outcome`] (result
//! application) so both halves are testable and so a response that arrives
//! after the poll's view state was reset cannot corrupt anything.

use async_trait::async_trait;
use log::{info, warn};
use std::collections::HashMap;

use crate::auth::CredentialStore;
use crate::common::validation::{normalize_code, validate_code};
use crate::gateway::GatewayError;
use crate::models::{DecryptResponse, Versus};

/// Shown when the server reports failure without a usable message.
pub const DECRYPT_FAILED: &str = "decryption failed";

/// Shown when the decrypt request itself could not complete.
pub const SERVER_UNREACHABLE: &str = "could not reach server";

/// Backend capable of decrypting one poll's title with a code.
///
/// The decrypt endpoint is an opaque per-(poll, code) predicate; the
/// engine makes no assumption about which codes work for which polls.
#[async_trait]
pub trait DecryptBackend {
    async fn decrypt_title(
        &self,
        poll_id: u64,
        code: &str,
    ) -> Result<DecryptResponse, GatewayError>;
}

/// Display state of one poll's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisclosureState {
    /// Initial and post-failure state. The optional error is shown inline.
    Masked { error: Option<String> },
    /// A decrypt request is in flight; further submits for this poll are
    /// ignored until it resolves.
    Submitting,
    /// The title was decrypted for this poll. Terminal.
    Revealed { title: String },
}

impl DisclosureState {
    fn masked() -> Self {
        DisclosureState::Masked { error: None }
    }

    fn masked_with(error: impl Into<String>) -> Self {
        DisclosureState::Masked {
            error: Some(error.into()),
        }
    }
}

/// Everything the engine tracks for one rendered poll.
#[derive(Debug, Clone)]
pub struct Disclosure {
    /// The code currently typed into this poll's reveal input
    pub entered_code: String,
    pub state: DisclosureState,
}

impl Default for Disclosure {
    fn default() -> Self {
        Self {
            entered_code: String::new(),
            state: DisclosureState::masked(),
        }
    }
}

/// Per-poll disclosure state machine, keyed by poll id.
#[derive(Debug, Default)]
pub struct DisclosureEngine {
    polls: HashMap<u64, Disclosure>,
}

impl DisclosureEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for a poll; `Masked` with no error if never touched.
    pub fn state(&self, poll_id: u64) -> DisclosureState {
        self.polls
            .get(&poll_id)
            .map(|d| d.state.clone())
            .unwrap_or_else(DisclosureState::masked)
    }

    /// The inline error for a poll, if its last attempt failed.
    pub fn error(&self, poll_id: u64) -> Option<String> {
        match self.state(poll_id) {
            DisclosureState::Masked { error } => error,
            _ => None,
        }
    }

    /// True while a decrypt request for this poll is in flight.
    pub fn is_pending(&self, poll_id: u64) -> bool {
        matches!(self.state(poll_id), DisclosureState::Submitting)
    }

    /// The code currently entered for a poll.
    pub fn entered_code(&self, poll_id: u64) -> String {
        self.polls
            .get(&poll_id)
            .map(|d| d.entered_code.clone())
            .unwrap_or_default()
    }

    /// Record what the user has typed into a poll's reveal input.
    pub fn set_entered_code(&mut self, poll_id: u64, code: &str) {
        self.polls.entry(poll_id).or_default().entered_code = code.to_string();
    }

    /// Pre-populate a poll's input with the viewer's own stored decryption
    /// code, when one is known. A convenience, not a bypass: the explicit
    /// submit still happens and the backend still verifies the code.
    ///
    /// Returns true if a code was filled in.
    pub fn autofill(&mut self, poll_id: u64, store: &CredentialStore) -> bool {
        match store.code() {
            Some(code) => {
                self.set_entered_code(poll_id, &code);
                true
            }
            None => false,
        }
    }

    /// Validate a raw code and, if it passes, transition the poll to
    /// `Submitting`.
    ///
    /// Returns the normalized code to send, or `None` when nothing must be
    /// sent: the code failed validation (state carries the inline error,
    /// no network call), the poll is already `Submitting` (at most one
    /// in-flight decrypt per poll), or the title is already revealed.
    pub fn begin_submit(&mut self, poll_id: u64, raw_code: &str) -> Option<String> {
        let entry = self.polls.entry(poll_id).or_default();

        match entry.state {
            DisclosureState::Submitting => {
                warn!("poll {}: decrypt already in flight, ignoring", poll_id);
                return None;
            }
            DisclosureState::Revealed { .. } => {
                return None;
            }
            DisclosureState::Masked { .. } => {}
        }

        let code = normalize_code(raw_code);
        if let Err(e) = validate_code(&code) {
            entry.state = DisclosureState::masked_with(e.to_string());
            return None;
        }

        entry.entered_code = code.clone();
        entry.state = DisclosureState::Submitting;
        Some(code)
    }

    /// Apply the result of a decrypt request for a poll.
    ///
    /// A no-op unless the poll is currently `Submitting`: a response that
    /// arrives after the poll's state was reset (view navigated away) or
    /// that belongs to no tracked poll must not mutate anything.
    pub fn apply_outcome(
        &mut self,
        poll_id: u64,
        outcome: Result<DecryptResponse, GatewayError>,
    ) {
        let Some(entry) = self.polls.get_mut(&poll_id) else {
            warn!("poll {}: dropping decrypt result for untracked poll", poll_id);
            return;
        };
        if entry.state != DisclosureState::Submitting {
            warn!("poll {}: dropping stale decrypt result", poll_id);
            return;
        }

        entry.state = match outcome {
            Ok(DecryptResponse {
                success: true,
                title: Some(title),
                ..
            }) => {
                info!("poll {}: title revealed", poll_id);
                DisclosureState::Revealed { title }
            }
            Ok(DecryptResponse {
                success: true,
                title: None,
                ..
            }) => DisclosureState::masked_with(DECRYPT_FAILED),
            Ok(DecryptResponse { message, .. }) => DisclosureState::masked_with(
                message.unwrap_or_else(|| DECRYPT_FAILED.to_string()),
            ),
            Err(e) => {
                warn!("poll {}: decrypt request failed: {}", poll_id, e);
                DisclosureState::masked_with(SERVER_UNREACHABLE)
            }
        };
    }

    /// Full submit: guard, backend call, outcome application.
    ///
    /// Returns the state the poll ends up in. When `begin_submit` rejects
    /// the attempt no backend call is made at all.
    pub async fn submit_code<B: DecryptBackend>(
        &mut self,
        backend: &B,
        poll_id: u64,
        raw_code: &str,
    ) -> DisclosureState {
        if let Some(code) = self.begin_submit(poll_id, raw_code) {
            let outcome = backend.decrypt_title(poll_id, &code).await;
            self.apply_outcome(poll_id, outcome);
        }
        self.state(poll_id)
    }

    /// The title to display for a poll under the disclosure rule:
    /// plaintext only from this poll's own `Revealed` state, otherwise the
    /// masked variant, otherwise the literal `***` placeholder. The wire
    /// `title` field is deliberately never consulted.
    pub fn display_title<'a>(&'a self, poll: &'a Versus) -> &'a str {
        match self.polls.get(&poll.id) {
            Some(Disclosure {
                state: DisclosureState::Revealed { title },
                ..
            }) => title.as_str(),
            _ => poll.masked_label(),
        }
    }

    /// Drop a poll's view state (navigation away). Any in-flight result
    /// for it becomes a no-op in [`Self::apply_outcome`].
    pub fn reset(&mut self, poll_id: u64) {
        self.polls.remove(&poll_id);
    }
}
