use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::{DaoLayerError, DaoResult, TodoStore};
use crate::db::entities::prelude::Todo;
use crate::db::entities::todo;

/// Write payload for [`TodoStore::upsert`]. `id: None` means "create".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertTodo {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub priority: i32,
    pub done: bool,
}

impl UpsertTodo {
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            priority,
            done: false,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    fn validated(self) -> DaoResult<todo::ActiveModel> {
        if self.name.trim().is_empty() {
            return Err(DaoLayerError::Validation {
                field: "name",
                message: "must not be blank",
            });
        }

        Ok(todo::ActiveModel {
            id: Set(self.id.unwrap_or_else(Uuid::new_v4)),
            name: Set(self.name),
            description: Set(self.description),
            priority: Set(self.priority),
            done: Set(self.done),
            ..Default::default()
        })
    }
}

#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

impl TodoDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl TodoStore for TodoDao {
    async fn upsert(&self, todo: UpsertTodo) -> DaoResult<Vec<todo::Model>> {
        let active = todo.validated()?;

        let txn = self.db.begin().await?;
        Todo::insert(active)
            .on_conflict(
                OnConflict::column(todo::Column::Id)
                    .update_columns([
                        todo::Column::Name,
                        todo::Column::Description,
                        todo::Column::Priority,
                        todo::Column::Done,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        let todos = ordered(&txn).await?;
        txn.commit().await?;

        Ok(todos)
    }

    async fn remove(&self, id: Uuid) -> DaoResult<Vec<todo::Model>> {
        let txn = self.db.begin().await?;
        let result = Todo::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            tracing::debug!(%id, "remove skipped, todo not present");
        }
        let todos = ordered(&txn).await?;
        txn.commit().await?;

        Ok(todos)
    }

    async fn list(&self) -> DaoResult<Vec<todo::Model>> {
        ordered(&self.db).await
    }
}

// The in-process sort pins name order to bytewise comparison whatever the
// database collation is; the id column keeps equal (priority, name) pairs
// stable between calls.
async fn ordered<C: ConnectionTrait>(conn: &C) -> DaoResult<Vec<todo::Model>> {
    let mut todos = Todo::find()
        .order_by_desc(todo::Column::Priority)
        .order_by_asc(todo::Column::Name)
        .order_by_asc(todo::Column::Id)
        .all(conn)
        .await?;
    todos.sort_by(todo::listing_order);
    Ok(todos)
}
