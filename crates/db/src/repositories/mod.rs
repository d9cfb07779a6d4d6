pub mod cart_repo;
pub mod item_repo;

pub use cart_repo::{CartRepo, LedgerError};
pub use item_repo::ItemRepo;
