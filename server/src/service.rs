//! Pass-through from the HTTP handlers to storage.
//!
//! Repository calls block (SQLite), so each one runs on tokio's blocking
//! pool rather than on a runtime worker.

use std::sync::Arc;

use tokio::task;

use crate::{
    model::{Todo, TodoRecord},
    repository::{StorageError, StorageResult, TodoRepository},
};

#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    async fn blocking<T, F>(&self, op: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn TodoRepository) -> StorageResult<T> + Send + 'static,
    {
        let repo = Arc::clone(&self.repo);
        task::spawn_blocking(move || op(repo.as_ref()))
            .await
            .map_err(|e| StorageError::Task(e.to_string()))?
    }

    pub async fn get_all_todos(&self) -> StorageResult<Vec<Todo>> {
        self.blocking(|repo| repo.find_all()).await
    }

    pub async fn get_todo_by_id(&self, id: i64) -> StorageResult<Option<Todo>> {
        self.blocking(move |repo| repo.find_by_id(id)).await
    }

    pub async fn save_todo(&self, record: TodoRecord) -> StorageResult<Todo> {
        self.blocking(move |repo| repo.save(record)).await
    }

    pub async fn delete_todo(&self, id: i64) -> StorageResult<()> {
        self.blocking(move |repo| repo.delete_by_id(id)).await
    }
}
