use async_trait::async_trait;

use crate::todo::TodoItem;

use super::Result;

/// Backing store for the to-do table.
///
/// Every call is a round trip to the backing service; implementations do no
/// local caching. The table is keyed by `id` alone, so point reads and
/// deletes are O(1).
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Returns whether the backing table exists.
    async fn exists(&self) -> Result<bool>;

    /// Creates the backing table and blocks until it is ready to serve.
    async fn create_table(&self, read_capacity: i64, write_capacity: i64) -> Result<()>;

    /// Reads every record in the table, unordered.
    async fn scan_all(&self) -> Result<Vec<TodoItem>>;

    /// Gets an item by its id.
    async fn get(&self, id: i64) -> Result<Option<TodoItem>>;

    /// Upserts an item by its id.
    async fn save(&self, item: &TodoItem) -> Result<()>;

    /// Deletes an item by its id. Deleting an absent id is not an error.
    async fn delete(&self, id: i64) -> Result<()>;
}
