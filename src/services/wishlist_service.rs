use crate::data::models::cart::Cart;
use crate::data::models::product::Product;
use crate::data::models::wishlist::Wishlist;
use crate::services::cart_service::CartService;

/// Pure wishlist transitions, same shape as the cart service.
pub struct WishlistService;

impl WishlistService {
    pub fn new() -> Self {
        WishlistService
    }

    /// Saves a product. Already-saved products are left alone.
    pub fn add(&self, wishlist: &Wishlist, product: &Product) -> Wishlist {
        if self.contains(wishlist, product.id) {
            return wishlist.clone();
        }
        let mut items = wishlist.items.clone();
        items.push(product.clone());
        Wishlist { items }
    }

    pub fn remove(&self, wishlist: &Wishlist, product_id: i32) -> Wishlist {
        Wishlist {
            items: wishlist
                .items
                .iter()
                .filter(|item| item.id != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Heart-button behavior: save if absent, unsave if present.
    pub fn toggle(&self, wishlist: &Wishlist, product: &Product) -> Wishlist {
        if self.contains(wishlist, product.id) {
            self.remove(wishlist, product.id)
        } else {
            self.add(wishlist, product)
        }
    }

    pub fn contains(&self, wishlist: &Wishlist, product_id: i32) -> bool {
        wishlist.items.iter().any(|item| item.id == product_id)
    }

    /// Moves a saved product into the cart as a single unit. Both states come
    /// back unchanged when the id is not saved.
    pub fn move_to_cart(&self, wishlist: &Wishlist, cart: &Cart, product_id: i32) -> (Wishlist, Cart) {
        match wishlist.items.iter().find(|item| item.id == product_id) {
            Some(product) => {
                let cart = CartService::new().add(cart, product, 1);
                let wishlist = self.remove(wishlist, product_id);
                (wishlist, cart)
            }
            None => (wishlist.clone(), cart.clone()),
        }
    }
}

impl Default for WishlistService {
    fn default() -> Self {
        WishlistService::new()
    }
}
