//! Shared application state for the API server.

use std::sync::Arc;

use starfolk_store::CharacterStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// store is the only mutable piece, and it only changes by swapping in
/// a whole new collection.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The character store every handler reads from.
    pub store: Arc<CharacterStore>,
}

impl AppState {
    /// Create application state around an existing store.
    pub const fn new(store: Arc<CharacterStore>) -> Self {
        Self { store }
    }
}
