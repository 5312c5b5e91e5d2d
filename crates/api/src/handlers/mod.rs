//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `stencil_db` and map
//! errors via [`crate::error::AppError`].

pub mod categories;
pub mod templates;

use stencil_core::types::DocId;

/// Honour a client-supplied document id only when it is syntactically valid;
/// anything else is discarded so the repository generates a fresh one.
pub(crate) fn client_supplied_id(id: Option<&str>) -> Option<DocId> {
    id.and_then(|raw| raw.parse::<DocId>().ok())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
