// server/src/repository/mod.rs

//! Typed accessors over the record store.
//!
//! Methods return `anyhow::Result` so store-level faults surface unchanged
//! to the controller, which maps them to the response envelope. Identifier
//! parsing is the store's concern: `replace` and `delete` take the raw path
//! string, and a malformed identifier is a store fault, not a controller
//! validation failure.

pub mod memory;
pub mod postgres;

use crate::models::{Product, ProductDraft};
use anyhow::Result;
use async_trait::async_trait;

pub use memory::MemoryProductRepository;
pub use postgres::PgProductRepository;

#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Every stored product, in insertion order. No filtering, no pagination.
  async fn list_all(&self) -> Result<Vec<Product>>;

  /// Insert a new product; the store assigns `id` and both timestamps.
  async fn create(&self, draft: ProductDraft) -> Result<Product>;

  /// Replace the mutable field set of the matching document and bump
  /// `updated_at`. Returns the post-update document, or `None` if no
  /// document matches `id`.
  async fn replace(&self, id: &str, draft: ProductDraft) -> Result<Option<Product>>;

  /// Remove the matching document, returning it, or `None` if none matched.
  async fn delete(&self, id: &str) -> Result<Option<Product>>;
}
