// server/src/repository/memory.rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use super::ProductRepository;
use crate::models::{Product, ProductDraft};

/// In-memory record store with the same semantics as the Postgres backend,
/// including the malformed-identifier fault on replace/delete. Backs the
/// integration tests.
#[derive(Default)]
pub struct MemoryProductRepository {
  products: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

fn parse_store_id(id: &str) -> Result<Uuid> {
  Uuid::parse_str(id).with_context(|| format!("'{}' is not a valid store identifier", id))
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
  async fn list_all(&self) -> Result<Vec<Product>> {
    Ok(self.products.read().clone())
  }

  async fn create(&self, draft: ProductDraft) -> Result<Product> {
    let now = Utc::now();
    let product = Product {
      id: Uuid::new_v4(),
      name: draft.name,
      price: draft.price,
      image: draft.image,
      created_at: now,
      updated_at: now,
    };
    self.products.write().push(product.clone());
    Ok(product)
  }

  async fn replace(&self, id: &str, draft: ProductDraft) -> Result<Option<Product>> {
    let id = parse_store_id(id)?;
    let mut products = self.products.write();
    match products.iter_mut().find(|p| p.id == id) {
      Some(existing) => {
        existing.name = draft.name;
        existing.price = draft.price;
        existing.image = draft.image;
        existing.updated_at = Utc::now();
        Ok(Some(existing.clone()))
      }
      None => Ok(None),
    }
  }

  async fn delete(&self, id: &str) -> Result<Option<Product>> {
    let id = parse_store_id(id)?;
    let mut products = self.products.write();
    match products.iter().position(|p| p.id == id) {
      Some(index) => Ok(Some(products.remove(index))),
      None => Ok(None),
    }
  }
}
