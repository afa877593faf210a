use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::model::{Todo, TodoRecord};

use super::{StorageError, StorageResult, TodoRepository};

struct Table {
    rows: BTreeMap<i64, Todo>,
    // Greater than every id ever stored; `None` once `i64::MAX` is taken.
    next_id: Option<i64>,
}

/// Process-local storage. Contents are lost when the process exits.
pub struct InMemoryTodoRepository {
    table: RwLock<Table>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, Table>> {
        self.table.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, Table>> {
        self.table.write().map_err(|_| StorageError::Poisoned)
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn find_all(&self) -> StorageResult<Vec<Todo>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Todo>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    fn save(&self, record: TodoRecord) -> StorageResult<Todo> {
        let mut table = self.write()?;
        let id = match record.id {
            Some(id) => id,
            None => table.next_id.ok_or(StorageError::IdsExhausted)?,
        };
        table.next_id = match (table.next_id, id.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };

        let todo = Todo {
            id,
            title: record.title,
            completed: record.completed,
        };
        table.rows.insert(id, todo.clone());
        Ok(todo)
    }

    fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        self.write()?.rows.remove(&id);
        Ok(())
    }
}
