//! HTTP API for the StarFolk character catalogue.
//!
//! This crate provides an Axum server exposing a read-only view of the
//! character collection held by [`starfolk_store::CharacterStore`]:
//!
//! - **Search** (`GET /api/characters?search=`) -- case-insensitive name match
//! - **Featured** (`GET /api/characters/featured`) -- promoted characters
//! - **Lookup** (`GET /api/characters/{id}`) -- one character by numeric id
//! - **Reload** (`POST /api/__reload`) -- re-read the data file from disk
//!
//! Every handler takes one snapshot of the store and answers from it, so
//! a reload running at the same time never produces a mixed result.
//! CORS is open to any origin.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use crate::config::{ConfigError, ServiceConfig};
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
