use crate::data::models::product::Product;
use serde::{Deserialize, Serialize};

/// Saved-for-later products, one snapshot per product id, in the order they
/// were saved.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Wishlist {
    pub items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Wishlist::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
