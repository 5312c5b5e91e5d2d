//! Thin binding of the generic repository to the `templates` collection,
//! plus category reference resolution for single-item reads.

use serde_json::Value;
use sqlx::PgPool;
use stencil_core::types::DocId;

use crate::models::category::Category;
use crate::models::template::{CreateTemplate, Template, TemplateWithCategory, UpdateTemplate};
use crate::repositories::doc_repo::{DocRepo, RepoError};

/// CRUD operations for templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// List templates matching `filter`. Listings carry the raw category
    /// reference id; resolution is only paid on single-item reads.
    pub async fn list(
        pool: &PgPool,
        filter: Value,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Template>, RepoError> {
        DocRepo::<Template>::list(pool, filter, limit, offset).await
    }

    /// Find a template by its id, without resolving the category reference.
    pub async fn find_by_id(pool: &PgPool, id: DocId) -> Result<Option<Template>, RepoError> {
        DocRepo::<Template>::find_by_id(pool, id).await
    }

    /// Fetch a template and resolve its category reference.
    ///
    /// Resolution is an explicit second lookup. An absent or dangling
    /// reference resolves to `None` rather than an error.
    pub async fn find_with_category(
        pool: &PgPool,
        id: DocId,
    ) -> Result<Option<TemplateWithCategory>, RepoError> {
        let Some(template) = DocRepo::<Template>::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let category = match template.category {
            Some(category_id) => DocRepo::<Category>::find_by_id(pool, category_id).await?,
            None => None,
        };

        Ok(Some(TemplateWithCategory::new(template, category)))
    }

    /// Create a new template, returning the stored document.
    pub async fn create(
        pool: &PgPool,
        id: Option<DocId>,
        input: &CreateTemplate,
    ) -> Result<Template, RepoError> {
        DocRepo::<Template>::create(pool, id, input).await
    }

    /// Partially update a template by id, returning the updated document.
    pub async fn update(
        pool: &PgPool,
        id: DocId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, RepoError> {
        DocRepo::<Template>::update(pool, id, input).await
    }

    /// Delete a template by id. Returns `true` if a document was deleted.
    pub async fn delete(pool: &PgPool, id: DocId) -> Result<bool, RepoError> {
        DocRepo::<Template>::delete(pool, id).await
    }
}
