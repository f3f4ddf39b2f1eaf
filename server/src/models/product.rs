// server/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The persisted product entity. `id` and the timestamps are assigned and
/// maintained by the record store; everything else comes from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub price: f64,
  pub image: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Caller-supplied field set for create/update, prior to persistence-assigned
/// fields. Unknown fields in the request body are ignored; a missing or
/// ill-typed required field fails deserialization and is rejected with 400.
/// The same policy applies on create and update so the two stay symmetric.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDraft {
  pub name: String,
  pub price: f64,
  pub image: String,
}
