//! Persistence seam for items.
//!
//! Implementations own ordering, durability and concurrency. The trait
//! stores exactly what it is given: callers build fully formed `Item`s,
//! including id and creation timestamp.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::types::Item;

#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// Look up one item. `Ok(None)` when the id is unknown.
    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, RepositoryError>;

    /// All stored items, in whatever order the backend yields them.
    async fn get_items(&self) -> Result<Vec<Item>, RepositoryError>;

    async fn create_item(&self, item: Item) -> Result<(), RepositoryError>;

    /// Replace the stored item that has the same id.
    async fn update_item(&self, item: Item) -> Result<(), RepositoryError>;

    async fn delete_item(&self, id: Uuid) -> Result<(), RepositoryError>;
}
