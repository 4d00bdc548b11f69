use async_trait::async_trait;
use uuid::Uuid;

use super::{DaoResult, UpsertTodo};
use crate::db::entities::todo;

/// Durable storage of todos. Every operation returns the complete listing
/// in [`todo::listing_order`] as observed right after the operation.
///
/// Each call is atomic on its own: a failed call leaves no partial write.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Inserts when `todo.id` is unset or unknown, otherwise overwrites the
    /// stored record. Blank names are rejected before storage is touched.
    async fn upsert(&self, todo: UpsertTodo) -> DaoResult<Vec<todo::Model>>;

    /// Deletes the record if present. Unknown ids are not an error.
    async fn remove(&self, id: Uuid) -> DaoResult<Vec<todo::Model>>;

    async fn list(&self) -> DaoResult<Vec<todo::Model>>;
}
