//! REST endpoint handlers.
//!
//! Each handler takes one snapshot of the character store and answers
//! entirely from it.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/characters` | Search by name (`?search=`) |
//! | `GET` | `/api/characters/featured` | Featured characters |
//! | `GET` | `/api/characters/{id}` | Single character by id |
//! | `POST` | `/api/__reload` | Re-read the data file |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned by `POST /api/__reload`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReloadResponse {
    /// Always `true`; a failed load still counts as a reload.
    pub ok: bool,
    /// Number of characters now being served.
    pub count: usize,
}

// ---------------------------------------------------------------------------
// GET /api/characters -- name search
// ---------------------------------------------------------------------------

/// Return the characters whose name contains `search`, in file order.
///
/// Only the first `search` parameter is used. Empty or absent matches
/// everything.
pub async fn search_characters(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let snapshot = state.store.snapshot();
    Json(snapshot.search(search_term(&params))).into_response()
}

fn search_term(params: &[(String, String)]) -> &str {
    params
        .iter()
        .find(|(key, _)| key == "search")
        .map_or("", |(_, value)| value.as_str())
}

// ---------------------------------------------------------------------------
// GET /api/characters/featured
// ---------------------------------------------------------------------------

/// Return the characters marked as featured, in file order.
pub async fn featured_characters(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.store.snapshot();
    Json(snapshot.featured()).into_response()
}

// ---------------------------------------------------------------------------
// GET /api/characters/{id}
// ---------------------------------------------------------------------------

/// Return the first character whose `id` equals the path segment.
///
/// A segment that is not an integer is treated as an unknown route.
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Ok(Path(raw_id)) = raw_id else {
        return Err(ApiError::NoRoute);
    };
    let id = parse_id(&raw_id)?;

    let snapshot = state.store.snapshot();
    let record = snapshot.find_by_id(id).ok_or(ApiError::NotFound)?;

    Ok(Json(record).into_response())
}

/// Parse a path segment as a character id.
///
/// Digit strings too large for `i64` are still integers and can never
/// match, so they answer `NotFound` rather than `NoRoute`.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    if let Ok(id) = raw.parse() {
        return Ok(id);
    }
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Err(ApiError::NotFound)
    } else {
        Err(ApiError::NoRoute)
    }
}

// ---------------------------------------------------------------------------
// POST /api/__reload
// ---------------------------------------------------------------------------

/// Re-read the data file and report how many characters are now served.
///
/// Unauthenticated. A broken data file leaves the service running with
/// an empty collection and reports `count: 0`.
pub async fn reload(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let store = Arc::clone(&state.store);
    let snapshot = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|e| ApiError::Internal(format!("reload task failed: {e}")))?;

    let count = snapshot.len();
    info!(count, path = %state.store.path().display(), "Character data reloaded");

    Ok(Json(ReloadResponse { ok: true, count }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn search_term_takes_first_value() {
        assert_eq!(search_term(&pairs(&[("search", "storm"), ("search", "bo")])), "storm");
        assert_eq!(search_term(&pairs(&[("page", "2"), ("search", "bo")])), "bo");
    }

    #[test]
    fn search_term_defaults_to_empty() {
        assert_eq!(search_term(&[]), "");
        assert_eq!(search_term(&pairs(&[("q", "storm")])), "");
    }

    #[test]
    fn parse_id_accepts_signed_integers() {
        assert!(matches!(parse_id("42"), Ok(42)));
        assert!(matches!(parse_id("-3"), Ok(-3)));
    }

    #[test]
    fn parse_id_overflowing_digits_are_not_found() {
        assert!(matches!(parse_id("99999999999999999999"), Err(ApiError::NotFound)));
        assert!(matches!(parse_id("-99999999999999999999"), Err(ApiError::NotFound)));
    }

    #[test]
    fn parse_id_non_integers_are_no_route() {
        for raw in ["abc", "1.5", "-", "", "12a"] {
            assert!(matches!(parse_id(raw), Err(ApiError::NoRoute)), "{raw}");
        }
    }
}
