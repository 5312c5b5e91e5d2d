//! Generic CRUD repository over JSONB document collections.
//!
//! Every collection shares the `(id, doc, rev)` table shape, so one
//! parametrized repository serves all entities. Filtering is JSONB
//! containment (an equality map over document fields), partial update is a
//! single atomic merge on the store side, and the `rev` column never leaves
//! the database.

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;
use stencil_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use stencil_core::types::DocId;

use crate::models::Document;

/// Errors surfaced by the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A driver or storage error.
    #[error(transparent)]
    Db(#[from] sqlx::Error),

    /// A stored or submitted document failed (de)serialization.
    #[error("invalid document: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Generic CRUD access to one document collection.
pub struct DocRepo<D>(PhantomData<D>);

impl<D: Document> DocRepo<D> {
    /// List documents matching `filter`, an equality map over document
    /// fields (`{}` matches everything).
    ///
    /// Results come back in natural table order; `limit` defaults to
    /// [`DEFAULT_LIST_LIMIT`] and `offset` to 0, both clamped. Zero matches
    /// yields an empty vec, never an error.
    pub async fn list(
        pool: &PgPool,
        filter: Value,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<D>, RepoError> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);

        let query = format!(
            "SELECT doc FROM {} WHERE doc @> $1 LIMIT $2 OFFSET $3",
            D::COLLECTION
        );
        let docs: Vec<Value> = sqlx::query_scalar(&query)
            .bind(filter)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(RepoError::from))
            .collect()
    }

    /// Find a single document by id. Absence is `None`, not an error;
    /// callers decide whether that is a client error.
    pub async fn find_by_id(pool: &PgPool, id: DocId) -> Result<Option<D>, RepoError> {
        let query = format!("SELECT doc FROM {} WHERE id = $1", D::COLLECTION);
        let doc: Option<Value> = sqlx::query_scalar(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        doc.map(serde_json::from_value)
            .transpose()
            .map_err(RepoError::from)
    }

    /// Insert a new document under `id` when supplied, or a fresh v4 UUID
    /// otherwise. Returns the full stored document, defaulted fields
    /// included.
    pub async fn create<I: Serialize>(
        pool: &PgPool,
        id: Option<DocId>,
        input: &I,
    ) -> Result<D, RepoError> {
        let id = id.unwrap_or_else(DocId::new_v4);

        let mut doc = serde_json::to_value(input)?;
        if let Value::Object(ref mut fields) = doc {
            fields.insert("id".into(), Value::String(id.to_string()));
        }

        let query = format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2) RETURNING doc",
            D::COLLECTION
        );
        let stored: Value = sqlx::query_scalar(&query)
            .bind(id)
            .bind(doc)
            .fetch_one(pool)
            .await?;

        Ok(serde_json::from_value(stored)?)
    }

    /// Merge `patch` into the document at `id` in a single atomic statement.
    ///
    /// The patch's `id` key, if any, is discarded (ids are immutable), and
    /// only keys present in the patch are touched. `None` when no document
    /// with `id` exists.
    pub async fn update<P: Serialize>(
        pool: &PgPool,
        id: DocId,
        patch: &P,
    ) -> Result<Option<D>, RepoError> {
        let patch = serde_json::to_value(patch)?;

        let query = format!(
            "UPDATE {} SET doc = doc || ($2::jsonb - 'id'), rev = rev + 1 \
             WHERE id = $1 RETURNING doc",
            D::COLLECTION
        );
        let doc: Option<Value> = sqlx::query_scalar(&query)
            .bind(id)
            .bind(patch)
            .fetch_optional(pool)
            .await?;

        doc.map(serde_json::from_value)
            .transpose()
            .map_err(RepoError::from)
    }

    /// Delete the document at `id`. Returns `true` iff a row was deleted.
    pub async fn delete(pool: &PgPool, id: DocId) -> Result<bool, RepoError> {
        let query = format!("DELETE FROM {} WHERE id = $1", D::COLLECTION);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
