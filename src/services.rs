pub mod cart_service;
pub mod catalog_service;
pub mod errors;
pub mod wishlist_service;
