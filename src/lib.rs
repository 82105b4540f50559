//! # Versus Client
//!
//! Client for the Versus poll service: binary "A vs B" preference polls
//! whose titles are stored encrypted server-side. A per-user decryption
//! code, handed out at login/registration, is required to reveal any
//! title; everything renders masked by default.
//!
//! Core pieces:
//! - [`auth`]: persisted credentials and session reconstruction
//! - [`gateway`]: bounded, error-normalized access to the backend
//! - [`disclosure`]: the per-poll masked/revealed state machine
//! - [`api`]: typed endpoint wrappers
//! - [`app`]: session context and the views composed from the above

pub mod api;
pub mod app;
pub mod auth;
pub mod common;
pub mod disclosure;
pub mod gateway;
pub mod models;

pub use app::App;
pub use disclosure::{DisclosureEngine, DisclosureState};
pub use gateway::GatewayError;
