use crate::data::models::cart::{Cart, CartLine};
use crate::data::models::product::Product;
use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Orders strictly above this subtotal ship free.
static FREE_SHIPPING_THRESHOLD: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(500));

/// Flat domestic shipping fee below the threshold.
static FLAT_SHIPPING_FEE: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(50));

/// Flat 5% tax, no jurisdiction logic.
static TAX_RATE: Lazy<BigDecimal> =
    Lazy::new(|| BigDecimal::from_str("0.05").expect("tax rate literal parses"));

/// Order summary figures shown on the cart and checkout pages.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct OrderTotals {
    pub subtotal: BigDecimal,
    pub shipping: BigDecimal,
    pub tax: BigDecimal,
    pub total: BigDecimal,
}

/// Pure cart transitions: every operation takes the current cart and returns
/// the next one. Unknown product ids are no-ops, never errors.
pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        CartService
    }

    /// Adds `quantity` units of a product. An existing line for the same id
    /// absorbs the quantity; otherwise a snapshot line is appended.
    /// Non-positive quantities are clamped to 1.
    pub fn add(&self, cart: &Cart, product: &Product, quantity: u32) -> Cart {
        let quantity = quantity.max(1);
        let mut lines = cart.lines.clone();

        match lines.iter_mut().find(|line| line.product_id() == product.id) {
            Some(line) => line.quantity += quantity,
            None => lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }

        Cart { lines }
    }

    pub fn remove(&self, cart: &Cart, product_id: i32) -> Cart {
        Cart {
            lines: cart
                .lines
                .iter()
                .filter(|line| line.product_id() != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Replaces a line's quantity. Zero removes the line, matching the
    /// cart page's decrement-to-zero gesture.
    pub fn update_quantity(&self, cart: &Cart, product_id: i32, quantity: u32) -> Cart {
        if quantity == 0 {
            return self.remove(cart, product_id);
        }

        let mut lines = cart.lines.clone();
        if let Some(line) = lines.iter_mut().find(|line| line.product_id() == product_id) {
            line.quantity = quantity;
        }
        Cart { lines }
    }

    /// Empties the cart after a completed checkout.
    pub fn clear(&self, _cart: &Cart) -> Cart {
        Cart::new()
    }

    /// Derives the order summary. The flat fee applies whenever the subtotal
    /// is not strictly above the threshold, so an empty cart still quotes a
    /// shipping charge.
    pub fn totals(&self, cart: &Cart) -> OrderTotals {
        let subtotal = cart
            .lines
            .iter()
            .fold(BigDecimal::from(0), |sum, line| sum + line.line_total());

        let shipping = if subtotal > *FREE_SHIPPING_THRESHOLD {
            BigDecimal::from(0)
        } else {
            FLAT_SHIPPING_FEE.clone()
        };

        let tax = &subtotal * &*TAX_RATE;
        let total = &subtotal + &shipping + &tax;

        OrderTotals {
            subtotal,
            shipping,
            tax,
            total,
        }
    }

    /// Total units across all lines, for the navbar badge. Distinct from the
    /// number of lines.
    pub fn item_count(&self, cart: &Cart) -> u32 {
        cart.lines.iter().map(|line| line.quantity).sum()
    }
}

impl Default for CartService {
    fn default() -> Self {
        CartService::new()
    }
}
