//! Shape checks for incoming payloads.

use crate::error::ValidationError;
use crate::types::{CreateItemDto, UpdateItemDto};

fn check(name: &str, price: f64) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice(price));
    }
    Ok(())
}

impl CreateItemDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check(&self.name, self.price)
    }
}

impl UpdateItemDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check(&self.name, self.price)
    }
}
