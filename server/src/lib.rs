//! CRUD HTTP API for a single `Todo` entity.
//!
//! Requests flow through three layers: [`routes`] (HTTP, validation,
//! existence checks) calls [`service::TodoService`], which delegates to a
//! [`repository::TodoRepository`].

pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{Config, StorageKind};
pub use error::ApiError;
pub use model::{FieldErrors, Todo, TodoPayload, TodoRecord};
pub use repository::{InMemoryTodoRepository, SqliteTodoRepository, StorageError, TodoRepository};
pub use service::TodoService;

pub fn app(service: TodoService) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Opens the repository selected by `config`.
pub fn build_service(config: &Config) -> Result<TodoService, StorageError> {
    let repo: Arc<dyn TodoRepository> = match config.storage {
        StorageKind::Sqlite => Arc::new(SqliteTodoRepository::open(&config.database)?),
        StorageKind::Memory => Arc::new(InMemoryTodoRepository::new()),
    };
    Ok(TodoService::new(repo))
}

/// A service over a fresh in-memory repository.
pub fn in_memory_service() -> TodoService {
    TodoService::new(Arc::new(InMemoryTodoRepository::new()))
}

pub async fn run(listener: TcpListener, service: TodoService) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service)).await
}
