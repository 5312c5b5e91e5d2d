//! Thin binding of the generic repository to the `categories` collection.

use serde_json::Value;
use sqlx::PgPool;
use stencil_core::types::DocId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::repositories::doc_repo::{DocRepo, RepoError};

/// CRUD operations for categories. Pure pass-through; no augmentation.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List categories matching `filter`.
    pub async fn list(
        pool: &PgPool,
        filter: Value,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Category>, RepoError> {
        DocRepo::<Category>::list(pool, filter, limit, offset).await
    }

    /// Find a category by its id.
    pub async fn find_by_id(pool: &PgPool, id: DocId) -> Result<Option<Category>, RepoError> {
        DocRepo::<Category>::find_by_id(pool, id).await
    }

    /// Create a new category, returning the stored document.
    pub async fn create(
        pool: &PgPool,
        id: Option<DocId>,
        input: &CreateCategory,
    ) -> Result<Category, RepoError> {
        DocRepo::<Category>::create(pool, id, input).await
    }

    /// Partially update a category by id, returning the updated document.
    pub async fn update(
        pool: &PgPool,
        id: DocId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, RepoError> {
        DocRepo::<Category>::update(pool, id, input).await
    }

    /// Delete a category by id. Returns `true` if a document was deleted.
    pub async fn delete(pool: &PgPool, id: DocId) -> Result<bool, RepoError> {
        DocRepo::<Category>::delete(pool, id).await
    }
}
