//! Category model.

use serde::{Deserialize, Serialize};
use stencil_core::types::DocId;
use validator::Validate;

use super::{default_visible, Document};

/// A document from the `categories` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: DocId,
    pub name: String,
    pub visible: bool,
}

impl Document for Category {
    const COLLECTION: &'static str = "categories";
}

/// DTO for creating a category.
///
/// A client-supplied `id` is kept as a raw string: the route layer honours it
/// only when it parses as a UUID and discards it otherwise, so it must
/// neither fail deserialization nor leak into the stored document.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateCategory {
    #[serde(default, skip_serializing)]
    pub id: Option<String>,
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name cannot be empty")
    )]
    pub name: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// DTO for partially updating a category. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}
