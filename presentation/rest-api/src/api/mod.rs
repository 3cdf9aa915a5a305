pub mod cart;
pub mod category;
pub mod error;
pub mod health;
pub mod product;
pub mod security;
pub mod tags;
pub mod wishlist;
