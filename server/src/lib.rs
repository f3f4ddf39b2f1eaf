// server/src/lib.rs

//! Product shop REST API: a single `products` collection with create, list,
//! full-replace update and delete, every response wrapped in the uniform
//! `{success, data?, message?}` envelope.

pub mod config;
pub mod errors;
pub mod models;
pub mod repository;
pub mod state;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use models::{Product, ProductDraft};
pub use repository::{MemoryProductRepository, PgProductRepository, ProductRepository};
pub use state::AppState;
