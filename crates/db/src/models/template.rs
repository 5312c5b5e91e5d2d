//! Template model.
//!
//! Templates carry a weak reference to a category by id. The reference is
//! not enforced by the store: the category may be deleted at any time, and a
//! dangling reference resolves to absent on lookup.

use serde::{Deserialize, Serialize};
use stencil_core::types::DocId;
use validator::Validate;

use super::category::Category;
use super::{default_visible, Document};

/// A document from the `templates` collection.
///
/// `category` holds the raw reference id; see [`TemplateWithCategory`] for
/// the resolved form returned by single-item reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: DocId,
    pub name: String,
    #[serde(default)]
    pub category: Option<DocId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    pub visible: bool,
}

impl Document for Template {
    const COLLECTION: &'static str = "templates";
}

/// A template with its category reference resolved, for single-item reads.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateWithCategory {
    pub id: DocId,
    pub name: String,
    /// The resolved category document, or `null` when the reference is
    /// absent or dangling.
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    pub visible: bool,
}

impl TemplateWithCategory {
    /// Combine a raw template with its (possibly unresolved) category.
    pub fn new(template: Template, category: Option<Category>) -> Self {
        Self {
            id: template.id,
            name: template.name,
            category,
            thumbnail_url: template.thumbnail_url,
            asset_url: template.asset_url,
            visible: template.visible,
        }
    }
}

/// DTO for creating a template.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplate {
    #[serde(default, skip_serializing)]
    pub id: Option<String>,
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name cannot be empty")
    )]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<DocId>,
    #[validate(url(message = "thumbnailUrl is not a valid URL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[validate(url(message = "assetUrl is not a valid URL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// DTO for partially updating a template. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplate {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<DocId>,
    #[validate(url(message = "thumbnailUrl is not a valid URL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[validate(url(message = "assetUrl is not a valid URL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}
