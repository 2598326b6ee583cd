//! Entity to wire projection.

use crate::types::{Item, ItemDto};

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        ItemDto {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            created_date: item.created_date,
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        ItemDto {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            created_date: item.created_date,
        }
    }
}

impl Item {
    pub fn as_dto(&self) -> ItemDto {
        ItemDto::from(self)
    }
}
