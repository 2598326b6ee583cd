//! Domain entity and wire DTOs for the items API.
//!
//! # Design
//! `Item` is the authoritative record owned by the repository. The DTOs are
//! what crosses the HTTP boundary: `ItemDto` is always derived from an `Item`
//! at response time, and the two input payloads never carry `id` or
//! `created_date` because those are assigned server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored item. `id` and `created_date` are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_date: DateTime<Utc>,
}

impl Item {
    /// Build a new item with a fresh id, stamped with the current time.
    pub fn new(name: String, description: Option<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            created_date: Utc::now(),
        }
    }

    /// Returns the item that results from applying `update` to `self`.
    ///
    /// Identity fields (`id`, `created_date`) come from `self`; content fields
    /// are taken wholesale from the update, so an omitted description clears
    /// the stored one.
    pub fn merged(&self, update: UpdateItemDto) -> Self {
        Self {
            id: self.id,
            name: update.name,
            description: update.description,
            price: update.price,
            created_date: self.created_date,
        }
    }
}

impl From<CreateItemDto> for Item {
    fn from(input: CreateItemDto) -> Self {
        Item::new(input.name, input.description, input.price)
    }
}

/// A single item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_date: DateTime<Utc>,
}

/// Request payload for creating a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// Request payload for replacing an item's content. The id comes from the
/// route, never the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItemDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}
