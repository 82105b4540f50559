//! End-to-end exercise of the title disclosure workflow against a
//! scripted backend: bootstrap from persisted credentials, autofill,
//! submit, and the per-poll isolation of revealed titles.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use versus_client::auth::{bootstrap_identity, CredentialStore};
use versus_client::disclosure::{DecryptBackend, DisclosureEngine, DisclosureState};
use versus_client::models::{DecryptResponse, Versus, VersusOption};
use versus_client::GatewayError;

/// Backend holding one plaintext title per poll, unlocked by a single
/// account code. Counts decrypt calls.
struct ScriptedBackend {
    titles: HashMap<u64, String>,
    account_code: String,
    calls: Mutex<u32>,
}

impl ScriptedBackend {
    fn new(account_code: &str, titles: &[(u64, &str)]) -> Self {
        Self {
            titles: titles
                .iter()
                .map(|(id, t)| (*id, t.to_string()))
                .collect(),
            account_code: account_code.to_string(),
            calls: Mutex::new(0),
        }
    }

    fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl DecryptBackend for ScriptedBackend {
    async fn decrypt_title(
        &self,
        poll_id: u64,
        code: &str,
    ) -> Result<DecryptResponse, GatewayError> {
        *self.calls.lock().unwrap() += 1;

        if code != self.account_code {
            return Ok(DecryptResponse {
                success: false,
                title: None,
                message: Some("Code invalide".to_string()),
            });
        }
        match self.titles.get(&poll_id) {
            Some(title) => Ok(DecryptResponse {
                success: true,
                title: Some(title.clone()),
                message: None,
            }),
            None => Ok(DecryptResponse {
                success: false,
                title: None,
                message: Some("unknown poll".to_string()),
            }),
        }
    }
}

fn poll(id: u64, masked: &str) -> Versus {
    Versus {
        id,
        category: "Anime".to_string(),
        title: None,
        title_masked: Some(masked.to_string()),
        is_encrypted: true,
        option_a: VersusOption {
            text: "Naruto".to_string(),
            votes: 0,
            percentage: 0,
        },
        option_b: VersusOption {
            text: "One Piece".to_string(),
            votes: 0,
            percentage: 0,
        },
        total_votes: 0,
    }
}

#[tokio::test]
async fn full_reveal_flow_with_persisted_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");

    // A previous session stored a code (no token: logged-out viewer with a
    // remembered code).
    {
        let store = CredentialStore::new(&path);
        store.set_code(Some("AB12CD34".to_string()));
    }

    // New process: cold read, no identity without a token.
    let store = CredentialStore::new(&path);
    assert!(bootstrap_identity(&store).is_none());
    assert_eq!(store.code().as_deref(), Some("AB12CD34"));

    let backend = ScriptedBackend::new("AB12CD34", &[(7, "Naruto vs One Piece")]);
    let mut engine = DisclosureEngine::new();

    // Autofill from the stored code, then submit explicitly.
    assert!(engine.autofill(7, &store));
    let entered = engine.entered_code(7);
    let state = engine.submit_code(&backend, 7, &entered).await;

    assert_eq!(
        state,
        DisclosureState::Revealed {
            title: "Naruto vs One Piece".to_string()
        }
    );
    assert_eq!(backend.call_count(), 1);

    // Only poll 7 is revealed; poll 8 stays masked everywhere.
    let seven = poll(7, "Na**********");
    let eight = poll(8, "On**********");
    assert_eq!(engine.display_title(&seven), "Naruto vs One Piece");
    assert_eq!(engine.display_title(&eight), "On**********");
}

#[tokio::test]
async fn wrong_code_keeps_poll_masked_and_retry_succeeds() {
    let backend = ScriptedBackend::new("AB12CD34", &[(3, "Secret Title")]);
    let mut engine = DisclosureEngine::new();

    let state = engine.submit_code(&backend, 3, "WRONGCOD").await;
    assert_eq!(
        state,
        DisclosureState::Masked {
            error: Some("Code invalide".to_string())
        }
    );

    let state = engine.submit_code(&backend, 3, "AB12CD34").await;
    assert!(matches!(state, DisclosureState::Revealed { .. }));
    assert_eq!(backend.call_count(), 2);
}

#[tokio::test]
async fn invalid_length_code_never_calls_backend() {
    let backend = ScriptedBackend::new("AB12CD34", &[(3, "Secret Title")]);
    let mut engine = DisclosureEngine::new();

    for raw in ["", "short", "AB12CD3", "AB12CD345", "         "] {
        let state = engine.submit_code(&backend, 3, raw).await;
        assert_eq!(
            state,
            DisclosureState::Masked {
                error: Some("code must be 8 characters".to_string())
            },
            "raw code {:?}",
            raw
        );
    }
    assert_eq!(backend.call_count(), 0);
}
