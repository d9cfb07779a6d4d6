//! Grocer storefront server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! views, CLI) so integration tests and the binary entrypoint can both
//! access them.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
pub mod views;
