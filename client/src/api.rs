// client/src/api.rs

//! Wire types and the HTTP transport behind the product store.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A product as the API serializes it. The client treats the identifier and
/// the timestamps as opaque strings; it never computes on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  pub price: f64,
  pub image: String,
  pub created_at: String,
  pub updated_at: String,
}

/// Caller-supplied fields for create/update.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDraft {
  pub name: String,
  pub price: f64,
  pub image: String,
}

/// The uniform `{success, data?, message?}` wrapper every response carries.
/// `data` and `message` may be absent or null; both decode to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
  pub success: bool,
  pub data: Option<T>,
  pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Server answered {0}")]
  Status(StatusCode),
}

/// The four operations the store needs from the API. A trait so tests can
/// script responses and count calls without a network.
#[async_trait]
pub trait ProductApi: Send + Sync {
  async fn list(&self) -> Result<Envelope<Vec<Product>>, ApiError>;
  async fn create(&self, draft: &ProductDraft) -> Result<Envelope<Product>, ApiError>;
  async fn update(&self, id: &str, draft: &ProductDraft) -> Result<Envelope<Product>, ApiError>;
  async fn delete(&self, id: &str) -> Result<Envelope<Product>, ApiError>;
}

/// `reqwest` transport against a base URL (e.g. `http://127.0.0.1:5000`).
/// Any non-2xx status is an error before the body is decoded.
pub struct HttpApi {
  client: reqwest::Client,
  base_url: String,
}

impl HttpApi {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      base_url: base_url.into(),
    }
  }

  fn products_url(&self) -> String {
    format!("{}/api/products", self.base_url)
  }

  async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
  ) -> Result<Envelope<T>, ApiError> {
    let status = response.status();
    if !status.is_success() {
      return Err(ApiError::Status(status));
    }
    Ok(response.json::<Envelope<T>>().await?)
  }
}

#[async_trait]
impl ProductApi for HttpApi {
  async fn list(&self) -> Result<Envelope<Vec<Product>>, ApiError> {
    let response = self.client.get(self.products_url()).send().await?;
    Self::decode(response).await
  }

  async fn create(&self, draft: &ProductDraft) -> Result<Envelope<Product>, ApiError> {
    let response = self.client.post(self.products_url()).json(draft).send().await?;
    Self::decode(response).await
  }

  async fn update(&self, id: &str, draft: &ProductDraft) -> Result<Envelope<Product>, ApiError> {
    let url = format!("{}/{}", self.products_url(), id);
    let response = self.client.put(url).json(draft).send().await?;
    Self::decode(response).await
  }

  async fn delete(&self, id: &str) -> Result<Envelope<Product>, ApiError> {
    let url = format!("{}/{}", self.products_url(), id);
    let response = self.client.delete(url).send().await?;
    Self::decode(response).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Envelope decoding must not demand anything of `T` beyond Deserialize;
  // `HttpApi::decode` is instantiated with both `Product` and
  // `Vec<Product>`, and neither carries extra bounds.
  #[test]
  fn envelope_with_absent_data_and_message_decodes_to_none() {
    let envelope: Envelope<Product> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(envelope.success);
    assert!(envelope.data.is_none());
    assert!(envelope.message.is_none());
  }

  #[test]
  fn envelope_with_null_data_decodes_to_none() {
    let envelope: Envelope<Product> =
      serde_json::from_str(r#"{"success":true,"data":null,"message":"Product deleted successfully"}"#).unwrap();
    assert!(envelope.data.is_none());
    assert_eq!(envelope.message.as_deref(), Some("Product deleted successfully"));
  }

  #[test]
  fn envelope_decodes_a_product_list() {
    let envelope: Envelope<Vec<Product>> = serde_json::from_str(
      r#"{"success":true,"data":[{"id":"a","name":"Mug","price":9.99,"image":"http://x/y.png",
          "createdAt":"2026-08-26T12:00:00Z","updatedAt":"2026-08-26T12:00:00Z"}]}"#,
    )
    .unwrap();
    let products = envelope.data.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Mug");
    assert_eq!(products[0].created_at, "2026-08-26T12:00:00Z");
  }
}
