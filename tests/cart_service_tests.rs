use arbor_home_lib::data::models::cart::Cart;
use arbor_home_lib::data::models::product::{Availability, Category, Product};
use arbor_home_lib::services::cart_service::CartService;
use bigdecimal::BigDecimal;
use std::str::FromStr;

fn product(id: i32, name: &str, price: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: Category::LivingRoom,
        price: BigDecimal::from(price),
        old_price: None,
        rating: 4,
        reviews: 10,
        availability: Availability::Available { stock: 5 },
        badge: None,
        description: String::new(),
        material: String::new(),
        dimensions: String::new(),
        color: String::new(),
        image_uri: String::new(),
    }
}

fn decimal(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).expect("valid decimal literal")
}

#[test]
fn test_add_creates_snapshot_line() {
    let service = CartService::new();
    let sofa = product(1, "Sofa", 300);

    let cart = service.add(&Cart::new(), &sofa, 2);

    assert_eq!(cart.len(), 1);
    let line = cart.line(1).expect("Line should exist");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.product.name, "Sofa");
    assert_eq!(line.line_total(), BigDecimal::from(600));
}

#[test]
fn test_repeat_add_merges_into_one_line() {
    let service = CartService::new();
    let sofa = product(1, "Sofa", 300);

    let twice = service.add(&service.add(&Cart::new(), &sofa, 2), &sofa, 2);
    let once = service.add(&Cart::new(), &sofa, 4);

    assert_eq!(twice, once);
    assert_eq!(twice.len(), 1);
    assert_eq!(twice.line(1).map(|l| l.quantity), Some(4));
}

#[test]
fn test_add_clamps_zero_quantity_to_one() {
    let service = CartService::new();

    let cart = service.add(&Cart::new(), &product(1, "Sofa", 300), 0);

    assert_eq!(cart.line(1).map(|l| l.quantity), Some(1));
}

#[test]
fn test_remove_drops_only_the_matching_line() {
    let service = CartService::new();
    let cart = service.add(&service.add(&Cart::new(), &product(1, "Sofa", 300), 1), &product(2, "Table", 200), 1);

    let cart = service.remove(&cart, 1);

    assert_eq!(cart.len(), 1);
    assert!(cart.line(1).is_none());
    assert!(cart.line(2).is_some());
}

#[test]
fn test_remove_missing_id_is_a_no_op() {
    let service = CartService::new();
    let cart = service.add(&Cart::new(), &product(1, "Sofa", 300), 1);

    assert_eq!(service.remove(&cart, 42), cart);
}

#[test]
fn test_update_quantity_replaces_value() {
    let service = CartService::new();
    let cart = service.add(&Cart::new(), &product(1, "Sofa", 300), 5);

    let cart = service.update_quantity(&cart, 1, 2);

    assert_eq!(cart.line(1).map(|l| l.quantity), Some(2));
}

#[test]
fn test_update_quantity_zero_equals_remove() {
    let service = CartService::new();
    let cart = service.add(&Cart::new(), &product(1, "Sofa", 300), 3);

    assert_eq!(service.update_quantity(&cart, 1, 0), service.remove(&cart, 1));
    assert!(service.update_quantity(&cart, 1, 0).is_empty());
}

#[test]
fn test_update_quantity_missing_id_is_a_no_op() {
    let service = CartService::new();
    let cart = service.add(&Cart::new(), &product(1, "Sofa", 300), 3);

    assert_eq!(service.update_quantity(&cart, 42, 7), cart);
}

#[test]
fn test_clear_empties_the_cart() {
    let service = CartService::new();
    let cart = service.add(&Cart::new(), &product(1, "Sofa", 300), 3);

    assert!(service.clear(&cart).is_empty());
}

#[test]
fn test_totals_empty_cart_still_charges_shipping() {
    let service = CartService::new();

    let totals = service.totals(&Cart::new());

    // Zero subtotal is not above the free-shipping threshold, so the flat
    // fee applies even here.
    assert_eq!(totals.subtotal, BigDecimal::from(0));
    assert_eq!(totals.shipping, BigDecimal::from(50));
    assert_eq!(totals.tax, BigDecimal::from(0));
    assert_eq!(totals.total, BigDecimal::from(50));
}

#[test]
fn test_totals_above_threshold_ship_free() {
    let service = CartService::new();
    let cart = service.add(&Cart::new(), &product(1, "Sofa", 300), 2);

    let totals = service.totals(&cart);

    assert_eq!(totals.subtotal, BigDecimal::from(600));
    assert_eq!(totals.shipping, BigDecimal::from(0));
    assert_eq!(totals.tax, BigDecimal::from(30));
    assert_eq!(totals.total, BigDecimal::from(630));
}

#[test]
fn test_totals_below_threshold_charge_flat_fee() {
    let service = CartService::new();
    let cart = service.add(&service.add(&Cart::new(), &product(1, "Lamp", 100), 1), &product(2, "Stool", 50), 3);

    let totals = service.totals(&cart);

    assert_eq!(totals.subtotal, BigDecimal::from(250));
    assert_eq!(totals.shipping, BigDecimal::from(50));
    assert_eq!(totals.tax, decimal("12.5"));
    assert_eq!(totals.total, decimal("312.5"));
}

#[test]
fn test_totals_at_exactly_the_threshold_still_charge_shipping() {
    let service = CartService::new();
    let cart = service.add(&Cart::new(), &product(1, "Cabinet", 500), 1);

    let totals = service.totals(&cart);

    assert_eq!(totals.shipping, BigDecimal::from(50));
}

#[test]
fn test_item_count_sums_quantities_not_lines() {
    let service = CartService::new();
    let cart = service.add(&service.add(&Cart::new(), &product(1, "Sofa", 300), 2), &product(2, "Table", 200), 3);

    assert_eq!(service.item_count(&cart), 5);
    assert_eq!(cart.len(), 2);
    assert_eq!(service.item_count(&Cart::new()), 0);
}
