use arbor_home_lib::data::models::cart::Cart;
use arbor_home_lib::data::models::product::{Availability, Category, Product};
use arbor_home_lib::data::models::wishlist::Wishlist;
use arbor_home_lib::services::wishlist_service::WishlistService;
use bigdecimal::BigDecimal;

fn product(id: i32, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: Category::Bedroom,
        price: BigDecimal::from(250),
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

#[test]
fn test_add_is_idempotent() {
    let service = WishlistService::new();
    let bed = product(1, "Bed");

    let once = service.add(&Wishlist::new(), &bed);
    let twice = service.add(&once, &bed);

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[test]
fn test_remove_missing_id_is_a_no_op() {
    let service = WishlistService::new();
    let wishlist = service.add(&Wishlist::new(), &product(1, "Bed"));

    assert_eq!(service.remove(&wishlist, 42), wishlist);
}

#[test]
fn test_toggle_twice_is_identity() {
    let service = WishlistService::new();
    let bed = product(1, "Bed");
    let wishlist = service.add(&Wishlist::new(), &product(2, "Nightstand"));

    let toggled = service.toggle(&service.toggle(&wishlist, &bed), &bed);

    assert_eq!(toggled, wishlist);
}

#[test]
fn test_contains() {
    let service = WishlistService::new();
    let wishlist = service.add(&Wishlist::new(), &product(1, "Bed"));

    assert!(service.contains(&wishlist, 1));
    assert!(!service.contains(&wishlist, 2));
}

#[test]
fn test_move_to_cart_transfers_one_unit() {
    let service = WishlistService::new();
    let wishlist = service.add(&Wishlist::new(), &product(1, "Bed"));

    let (wishlist, cart) = service.move_to_cart(&wishlist, &Cart::new(), 1);

    assert!(wishlist.is_empty());
    assert_eq!(cart.line(1).map(|l| l.quantity), Some(1));
}

#[test]
fn test_move_to_cart_merges_with_existing_line() {
    let service = WishlistService::new();
    let bed = product(1, "Bed");
    let wishlist = service.add(&Wishlist::new(), &bed);
    let cart = arbor_home_lib::services::cart_service::CartService::new().add(&Cart::new(), &bed, 2);

    let (_, cart) = service.move_to_cart(&wishlist, &cart, 1);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.line(1).map(|l| l.quantity), Some(3));
}

#[test]
fn test_move_to_cart_unknown_id_leaves_both_unchanged() {
    let service = WishlistService::new();
    let wishlist = service.add(&Wishlist::new(), &product(1, "Bed"));
    let cart = Cart::new();

    let (after_wishlist, after_cart) = service.move_to_cart(&wishlist, &cart, 99);

    assert_eq!(after_wishlist, wishlist);
    assert_eq!(after_cart, cart);
}
