//! # Typed Backend Endpoints
//!
//! Thin, typed wrappers over the backend routes, one module per service
//! area. All of them go through the [`Gateway`](crate::gateway::Gateway)
//! and therefore share its deadline and error normalization.

pub mod auth;
pub mod polls;
pub mod search;

pub use auth::AuthError;
pub use polls::PollApi;
pub use search::SearchApi;
