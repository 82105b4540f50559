//! # Shared Utilities
//!
//! Configuration loading and input validation used across the client.

pub mod config;
pub mod validation;
