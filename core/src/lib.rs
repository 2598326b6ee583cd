//! Domain core for the items service.
//!
//! # Overview
//! Holds the `Item` entity, its wire DTOs, the pure entity→DTO mapping and
//! the `ItemsRepository` trait the HTTP layer depends on. Nothing here knows
//! about HTTP or a concrete datastore.
//!
//! # Design
//! - Identity (`id`, `created_date`) is assigned in `Item::new`, never by a
//!   repository or the transport.
//! - Updates use a merge: identity from the stored item, content from the
//!   payload (`Item::merged`).
//! - The repository is a trait object seam so any backend can stand in.

pub mod error;
pub mod mapping;
pub mod repository;
pub mod types;
pub mod validation;

pub use error::{RepositoryError, ValidationError};
pub use repository::ItemsRepository;
pub use types::{CreateItemDto, Item, ItemDto, UpdateItemDto};
