//! In-memory `ItemsRepository`, the default backend for the server binary
//! and for tests.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use items_core::{Item, ItemsRepository, RepositoryError};
use tokio::sync::RwLock;
use uuid::Uuid;

pub type Db = Arc<RwLock<HashMap<Uuid, Item>>>;

/// Items kept in a shared map. Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct InMemItemsRepository {
    db: Db,
}

impl InMemItemsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `items` already stored, keyed by their ids.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let map = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            db: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ItemsRepository for InMemItemsRepository {
    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, RepositoryError> {
        Ok(self.db.read().await.get(&id).cloned())
    }

    async fn get_items(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.db.read().await.values().cloned().collect())
    }

    async fn create_item(&self, item: Item) -> Result<(), RepositoryError> {
        self.db.write().await.insert(item.id, item);
        Ok(())
    }

    async fn update_item(&self, item: Item) -> Result<(), RepositoryError> {
        let mut items = self.db.write().await;
        let slot = items
            .get_mut(&item.id)
            .ok_or_else(|| RepositoryError::Storage(format!("no stored item with id {}", item.id)))?;
        *slot = item;
        Ok(())
    }

    async fn delete_item(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.db.write().await.remove(&id);
        Ok(())
    }
}
