use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::{dao::UpsertTodo, entities::todo},
    response::ApiResult,
    services::{ServiceContext, TodoService},
    state::AppState,
};

/// Body of `POST /todos` and `PUT /todos`. Accepts the English names or the
/// web client's Portuguese ones, which is also what [`TodoResponse`] emits.
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default, alias = "descricao")]
    pub description: String,
    #[serde(alias = "prioridade")]
    pub priority: i32,
    #[serde(default, alias = "realizado")]
    pub done: bool,
}

/// Listing entry in the web client's wire shape, so a listed todo can be
/// edited and sent straight back through `PUT /todos`.
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "prioridade")]
    pub priority: i32,
    #[serde(rename = "realizado")]
    pub done: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/todos",
            get(list_todos).post(create_todo).put(update_todo),
        )
        .route("/todos/{id}", delete(delete_todo))
        .with_state(state)
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TodoRequest>,
) -> ApiResult<Vec<TodoResponse>> {
    let todos = todo_service_from_state(state.as_ref())
        .create(body.into())
        .await?;
    Ok(Json(into_responses(todos)))
}

async fn list_todos(State(state): State<Arc<AppState>>) -> ApiResult<Vec<TodoResponse>> {
    let todos = todo_service_from_state(state.as_ref()).list().await?;
    Ok(Json(into_responses(todos)))
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TodoRequest>,
) -> ApiResult<Vec<TodoResponse>> {
    let todos = todo_service_from_state(state.as_ref())
        .update(body.into())
        .await?;
    Ok(Json(into_responses(todos)))
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Vec<TodoResponse>> {
    let todos = todo_service_from_state(state.as_ref()).delete(&id).await?;
    Ok(Json(into_responses(todos)))
}

impl From<TodoRequest> for UpsertTodo {
    fn from(request: TodoRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            description: request.description,
            priority: request.priority,
            done: request.done,
        }
    }
}

impl From<todo::Model> for TodoResponse {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            priority: model.priority,
            done: model.done,
        }
    }
}

fn into_responses(todos: Vec<todo::Model>) -> Vec<TodoResponse> {
    todos.into_iter().map(TodoResponse::from).collect()
}

fn todo_service_from_state(state: &AppState) -> TodoService {
    ServiceContext::from_state(state).todo()
}
