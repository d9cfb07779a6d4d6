//! Pure domain logic for the grocer storefront.
//!
//! Everything here is I/O-free so it can be used by the repository layer,
//! the HTTP handlers, and the CLI alike: pricing and discount math,
//! category display normalization, expiry classification, CSV export
//! assembly, and the shared error taxonomy.

pub mod category;
pub mod error;
pub mod expiry;
pub mod export;
pub mod pricing;
pub mod roles;
pub mod types;
