pub mod cart;
pub mod item;

pub use cart::CartLineView;
pub use item::{CreateItem, Item};
