//! Storage for todos.
//!
//! [`TodoRepository`] is a synchronous trait; callers on the async side go
//! through [`crate::service::TodoService`], which moves each call onto the
//! blocking pool.

mod memory;
mod sqlite;

pub use memory::InMemoryTodoRepository;
pub use sqlite::SqliteTodoRepository;

use crate::model::{Todo, TodoRecord};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage lock poisoned")]
    Poisoned,

    #[error("no free ids left")]
    IdsExhausted,

    #[error("storage task failed: {0}")]
    Task(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

pub trait TodoRepository: Send + Sync {
    /// Every stored todo in ascending id order.
    fn find_all(&self) -> StorageResult<Vec<Todo>>;

    /// `Ok(None)` when no todo has this id.
    fn find_by_id(&self, id: i64) -> StorageResult<Option<Todo>>;

    /// Inserts when `record.id` is `None`, assigning a fresh id. Otherwise
    /// overwrites the todo with that id, creating it if absent.
    fn save(&self, record: TodoRecord) -> StorageResult<Todo>;

    /// Removing an absent id is not an error.
    fn delete_by_id(&self, id: i64) -> StorageResult<()>;
}

#[cfg(test)]
mod contract {
    //! Behaviour every repository implementation must share.

    use super::*;

    pub fn insert_assigns_fresh_ids(repo: &dyn TodoRepository) {
        let a = repo.save(TodoRecord::new("first", false)).unwrap();
        let b = repo.save(TodoRecord::new("second", true)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "first");
        assert!(b.completed);
    }

    pub fn find_by_id_round_trips(repo: &dyn TodoRepository) {
        let saved = repo.save(TodoRecord::new("Buy milk", false)).unwrap();
        assert_eq!(repo.find_by_id(saved.id).unwrap(), Some(saved));
        assert_eq!(repo.find_by_id(9_999).unwrap(), None);
    }

    pub fn save_with_id_overwrites(repo: &dyn TodoRepository) {
        let saved = repo.save(TodoRecord::new("draft", false)).unwrap();
        let updated = repo
            .save(TodoRecord::new("final", true).with_id(saved.id))
            .unwrap();
        assert_eq!(updated.id, saved.id);
        assert_eq!(repo.find_by_id(saved.id).unwrap(), Some(updated));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    pub fn save_with_unknown_id_creates(repo: &dyn TodoRepository) {
        let created = repo.save(TodoRecord::new("explicit", false).with_id(50)).unwrap();
        assert_eq!(created.id, 50);

        // Fresh ids never collide with an explicitly saved one.
        let next = repo.save(TodoRecord::new("next", false)).unwrap();
        assert!(next.id > 50);
    }

    pub fn max_id_exhausts_fresh_ids(repo: &dyn TodoRepository) {
        let max = repo
            .save(TodoRecord::new("explicit max", false).with_id(i64::MAX))
            .unwrap();
        assert_eq!(max.id, i64::MAX);

        assert!(repo.save(TodoRecord::new("fresh insert", false)).is_err());
        assert_eq!(repo.find_by_id(i64::MAX).unwrap(), Some(max));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    pub fn find_all_is_ordered_by_id(repo: &dyn TodoRepository) {
        assert!(repo.find_all().unwrap().is_empty());
        let ids: Vec<i64> = (0..3)
            .map(|i| repo.save(TodoRecord::new(format!("t{i}"), false)).unwrap().id)
            .collect();
        let listed: Vec<i64> = repo.find_all().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(listed, ids);
    }

    pub fn delete_removes_and_tolerates_absent(repo: &dyn TodoRepository) {
        let saved = repo.save(TodoRecord::new("gone soon", false)).unwrap();
        repo.delete_by_id(saved.id).unwrap();
        assert_eq!(repo.find_by_id(saved.id).unwrap(), None);
        repo.delete_by_id(saved.id).unwrap();
        repo.delete_by_id(12_345).unwrap();
    }

    pub fn all(make: impl Fn() -> Box<dyn TodoRepository>) {
        insert_assigns_fresh_ids(&*make());
        find_by_id_round_trips(&*make());
        save_with_id_overwrites(&*make());
        save_with_unknown_id_creates(&*make());
        max_id_exhausts_fresh_ids(&*make());
        find_all_is_ordered_by_id(&*make());
        delete_removes_and_tolerates_absent(&*make());
    }
}
