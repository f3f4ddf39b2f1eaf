// server/src/repository/postgres.rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::ProductRepository;
use crate::models::{Product, ProductDraft};

pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Create the products table if it does not exist. The store owns the
  /// required-field validation (NOT NULL columns) and assigns identifiers
  /// and timestamps through column defaults.
  pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
      "CREATE TABLE IF NOT EXISTS products (
         id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
         name TEXT NOT NULL,
         price DOUBLE PRECISION NOT NULL,
         image TEXT NOT NULL,
         created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
         updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
       )",
    )
    .execute(pool)
    .await
    .context("Failed to ensure products schema")?;
    Ok(())
  }
}

/// Parse a raw path identifier into the store's id type. Failing here is a
/// store-level fault surfaced to the controller as such, matching the
/// original driver's cast error on a malformed identifier.
fn parse_store_id(id: &str) -> Result<Uuid> {
  Uuid::parse_str(id).with_context(|| format!("'{}' is not a valid store identifier", id))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  async fn list_all(&self) -> Result<Vec<Product>> {
    let products: Vec<Product> = sqlx::query_as(
      "SELECT id, name, price, image, created_at, updated_at FROM products ORDER BY created_at ASC",
    )
    .fetch_all(&self.pool)
    .await?;
    Ok(products)
  }

  async fn create(&self, draft: ProductDraft) -> Result<Product> {
    let product: Product = sqlx::query_as(
      "INSERT INTO products (name, price, image) VALUES ($1, $2, $3)
       RETURNING id, name, price, image, created_at, updated_at",
    )
    .bind(&draft.name)
    .bind(draft.price)
    .bind(&draft.image)
    .fetch_one(&self.pool)
    .await?;
    Ok(product)
  }

  async fn replace(&self, id: &str, draft: ProductDraft) -> Result<Option<Product>> {
    let id = parse_store_id(id)?;
    let product: Option<Product> = sqlx::query_as(
      "UPDATE products SET name = $2, price = $3, image = $4, updated_at = now()
       WHERE id = $1
       RETURNING id, name, price, image, created_at, updated_at",
    )
    .bind(id)
    .bind(&draft.name)
    .bind(draft.price)
    .bind(&draft.image)
    .fetch_optional(&self.pool)
    .await?;
    Ok(product)
  }

  async fn delete(&self, id: &str) -> Result<Option<Product>> {
    let id = parse_store_id(id)?;
    let product: Option<Product> = sqlx::query_as(
      "DELETE FROM products WHERE id = $1
       RETURNING id, name, price, image, created_at, updated_at",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;
    Ok(product)
  }
}
