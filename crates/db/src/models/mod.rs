//! Entity models and their create/update DTOs.

pub mod category;
pub mod template;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A domain document persisted in its own collection.
///
/// `COLLECTION` names the backing table. Every collection shares the same
/// `(id, doc, rev)` shape, which is what keeps the repository generic.
pub trait Document: Serialize + DeserializeOwned + Send + Unpin {
    const COLLECTION: &'static str;
}

/// Serde default for the `visible` flag on create DTOs.
pub(crate) fn default_visible() -> bool {
    true
}
