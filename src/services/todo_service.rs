use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::dao::{TodoStore, UpsertTodo},
    db::entities::todo,
    error::AppError,
};

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, todo: UpsertTodo) -> Result<Vec<todo::Model>, AppError> {
        let todos = self.store.upsert(todo).await?;
        tracing::info!(total = todos.len(), "todo created");
        Ok(todos)
    }

    /// Same write path as [`Self::create`]: an unknown or missing id inserts.
    pub async fn update(&self, todo: UpsertTodo) -> Result<Vec<todo::Model>, AppError> {
        let id = todo.id;
        let todos = self.store.upsert(todo).await?;
        tracing::info!(id = ?id, total = todos.len(), "todo saved");
        Ok(todos)
    }

    pub async fn list(&self) -> Result<Vec<todo::Model>, AppError> {
        Ok(self.store.list().await?)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<Vec<todo::Model>, AppError> {
        let todos = self.store.remove(*id).await?;
        tracing::info!(%id, total = todos.len(), "todo deleted");
        Ok(todos)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    use super::TodoService;
    use crate::db::dao::{DaoResult, TodoDao, TodoStore, UpsertTodo};
    use crate::db::entities::todo;
    use crate::error::AppError;

    #[derive(Default)]
    struct RecordingStore {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TodoStore for RecordingStore {
        async fn upsert(&self, todo: UpsertTodo) -> DaoResult<Vec<todo::Model>> {
            self.calls
                .lock()
                .expect("calls lock")
                .push(format!("upsert {}", todo.name));
            Ok(Vec::new())
        }

        async fn remove(&self, id: Uuid) -> DaoResult<Vec<todo::Model>> {
            self.calls
                .lock()
                .expect("calls lock")
                .push(format!("remove {id}"));
            Ok(Vec::new())
        }

        async fn list(&self) -> DaoResult<Vec<todo::Model>> {
            self.calls.lock().expect("calls lock").push("list".to_string());
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn delegates_every_operation_to_the_store() {
        let store = Arc::new(RecordingStore::default());
        let service = TodoService::new(store.clone());
        let id = Uuid::new_v4();

        service
            .create(UpsertTodo::new("new", 1))
            .await
            .expect("create should succeed");
        service
            .update(UpsertTodo::new("edited", 1).with_id(id))
            .await
            .expect("update should succeed");
        service.list().await.expect("list should succeed");
        service.delete(&id).await.expect("delete should succeed");

        let calls = store.calls.lock().expect("calls lock").clone();
        assert_eq!(
            calls,
            [
                "upsert new".to_string(),
                "upsert edited".to_string(),
                "list".to_string(),
                format!("remove {id}"),
            ]
        );
    }

    #[tokio::test]
    async fn blank_name_surfaces_as_bad_request() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = TodoService::new(Arc::new(TodoDao::new(&db)));

        let err = service
            .create(UpsertTodo::new("", 1))
            .await
            .expect_err("blank name should fail");
        assert!(matches!(err, AppError::BadRequest(message) if message == "Invalid name: must not be blank"));
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_internal_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let service = TodoService::new(Arc::new(TodoDao::new(&db)));

        let err = service.list().await.expect_err("list should fail");
        assert!(matches!(err, AppError::Internal(_)));
        assert!(!err.message().contains("connection reset"));
    }
}
