use crate::data::models::product::Product;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// One product-quantity pairing in the cart. Carries a snapshot of the
/// product as it looked when added, so the line renders without a catalog
/// lookup.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn product_id(&self) -> i32 {
        self.product.id
    }

    pub fn line_total(&self) -> BigDecimal {
        &self.product.price * BigDecimal::from(self.quantity)
    }
}

/// Session cart. At most one line per product id; quantities are always >= 1.
/// Lines keep insertion order.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn line(&self, product_id: i32) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines, not total units.
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
