//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use todoboard_core::storage::{Result, TodoStore};
use todoboard_core::todo::TodoItem;

/// In-memory storage backend for testing.
///
/// A HashMap behind `Arc<RwLock<_>>`; data is lost when the store is dropped.
/// The `ready` flag emulates table existence so the create-on-demand path is
/// exercised in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    items: Arc<RwLock<HashMap<i64, TodoItem>>>,
    ready: Arc<AtomicBool>,
}

impl InMemoryTodoStore {
    /// Creates an empty store whose "table" does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ready store seeded with the given items.
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        let store = Self::new();
        store.ready.store(true, Ordering::SeqCst);
        {
            // No contention exists during construction - try_write always succeeds
            let mut guard = store
                .items
                .try_write()
                .expect("items lock should be available during construction");
            for item in items {
                guard.insert(item.id, item);
            }
        }
        store
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn exists(&self) -> Result<bool> {
        Ok(self.ready.load(Ordering::SeqCst))
    }

    async fn create_table(&self, _read_capacity: i64, _write_capacity: i64) -> Result<()> {
        self.ready.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn save(&self, item: &TodoItem) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_table_marks_store_ready() {
        let store = InMemoryTodoStore::new();
        assert!(!store.exists().await.unwrap());

        store.create_table(1, 1).await.unwrap();
        assert!(store.exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_save_get_delete() {
        let store = InMemoryTodoStore::new();
        let item = TodoItem::new("Buy milk", 1);

        store.save(&item).await.unwrap();
        assert_eq!(store.get(1).await.unwrap(), Some(item.clone()));

        store.delete(1).await.unwrap();
        assert_eq!(store.get(1).await.unwrap(), None);

        // Deleting an absent id is not an error
        store.delete(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_is_an_upsert() {
        let store = InMemoryTodoStore::new();
        let mut item = TodoItem::new("Buy milk", 1);
        store.save(&item).await.unwrap();

        item.complete = true;
        store.save(&item).await.unwrap();

        assert_eq!(store.scan_all().await.unwrap().len(), 1);
        assert!(store.get(1).await.unwrap().unwrap().complete);
    }
}
