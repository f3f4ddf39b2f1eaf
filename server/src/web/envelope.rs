// server/src/web/envelope.rs

use serde::Serialize;

/// The uniform response wrapper every API operation returns:
/// `{success, data?, message?}`. `data` and `message` are omitted when
/// absent, except that delete/update misses serialize `data: null`
/// explicitly (the payload there is `Option<Product>`, so `data` is
/// present and null rather than omitted).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
  pub fn ok(data: T) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: None,
    }
  }

  pub fn ok_with_message(data: T, message: &str) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: Some(message.to_string()),
    }
  }
}

impl ApiResponse<()> {
  pub fn failure(message: &str) -> Self {
    Self {
      success: false,
      data: None,
      message: Some(message.to_string()),
    }
  }
}
