//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// List endpoint parameters (`?name=&limit=&offset=`).
///
/// `name` is an equality filter. Limit and offset are clamped in the
/// repository layer via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListParams {
    /// Build the repository filter map for these parameters.
    ///
    /// Named lookups only surface visible documents; an unfiltered listing
    /// intentionally returns everything regardless of visibility.
    pub fn filter(&self) -> serde_json::Value {
        match &self.name {
            Some(name) => serde_json::json!({ "name": name, "visible": true }),
            None => serde_json::json!({}),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
