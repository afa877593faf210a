//! HTTP handlers for `/api/todos`.
//!
//! Update and delete look the todo up first and return 404 without touching
//! storage when it is missing, so neither can create a todo as a side effect
//! of the repository's upsert.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::ApiError,
    model::{Todo, TodoPayload, TodoRecord},
    service::TodoService,
};

pub fn router() -> Router<TodoService> {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}

/// Unwraps the JSON body and validates it.
fn accept_payload(payload: Result<Json<TodoPayload>, JsonRejection>) -> Result<TodoRecord, ApiError> {
    let Json(payload) = payload.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::UnsupportedMediaType(rejection.body_text())
        }
        _ => ApiError::MalformedBody(rejection.body_text()),
    })?;
    payload.into_record().map_err(|errors| {
        tracing::debug!(?errors, "rejected todo payload");
        ApiError::Validation(errors)
    })
}

async fn list_todos(State(service): State<TodoService>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(service.get_all_todos().await?))
}

async fn get_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ApiError> {
    service
        .get_todo_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create_todo(
    State(service): State<TodoService>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let record = accept_payload(payload)?;
    let todo = service.save_todo(record).await?;
    tracing::info!(id = todo.id, "created todo");
    Ok(Json(todo))
}

async fn update_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let record = accept_payload(payload)?;
    if service.get_todo_by_id(id).await?.is_none() {
        tracing::debug!(id, "update of missing todo");
        return Err(ApiError::NotFound);
    }
    let todo = service.save_todo(record.with_id(id)).await?;
    tracing::info!(id, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if service.get_todo_by_id(id).await?.is_none() {
        tracing::debug!(id, "delete of missing todo");
        return Err(ApiError::NotFound);
    }
    service.delete_todo(id).await?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
