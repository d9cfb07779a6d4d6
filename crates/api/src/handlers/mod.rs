pub mod admin;
pub mod cart;
pub mod export;
pub mod health;
pub mod storefront;
