//! # Poll Authoring Flow
//!
//! Assembles a new poll from two option labels (picked from search
//! results) plus an optional title, and submits it. The typed plaintext
//! title leaves this flow exactly once, inside the create request; the
//! poll the caller gets back carries only the masked title the server
//! returned. Authoring a poll does not disclose its title.

use log::info;

use crate::app::App;
use crate::gateway::GatewayError;
use crate::models::{SearchHit, Versus};

/// A poll being assembled. Survives failed submissions intact so the user
/// can retry without re-picking anything.
#[derive(Debug, Clone, Default)]
pub struct PollDraft {
    pub category: String,
    /// Optional; an empty title falls back to `"<A> vs <B>"`.
    pub title: String,
    pub option_a: String,
    pub option_b: String,
}

impl PollDraft {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            ..Self::default()
        }
    }

    /// Use a search hit's title as one of the option labels.
    pub fn choose(&mut self, side: crate::models::Choice, hit: &SearchHit) {
        match side {
            crate::models::Choice::A => self.option_a = hit.title.clone(),
            crate::models::Choice::B => self.option_b = hit.title.clone(),
        }
    }

    /// Both option labels chosen.
    pub fn is_complete(&self) -> bool {
        !self.option_a.trim().is_empty() && !self.option_b.trim().is_empty()
    }

    /// The title sent to the server: the typed one, or `"<A> vs <B>"`.
    pub fn effective_title(&self) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            format!("{} vs {}", self.option_a.trim(), self.option_b.trim())
        } else {
            title.to_string()
        }
    }
}

/// Submit a draft.
///
/// A no-op (`Ok(None)`, no request fired) unless both labels are chosen
/// and the caller is authenticated. On success the created poll is
/// returned in its masked server representation; on failure the caller
/// keeps the draft and the error carries the displayable message.
pub async fn submit(app: &App, draft: &PollDraft) -> Result<Option<Versus>, GatewayError> {
    if !draft.is_complete() || !app.is_authenticated() {
        return Ok(None);
    }

    let mut created = app.polls.create(&draft.effective_title()).await?;
    // Whatever the server echoed back, the local representation keeps only
    // the masked form; the plaintext the author typed is gone from here on.
    created.title = None;
    info!("created poll {} ({})", created.id, created.masked_label());
    Ok(Some(created))
}
