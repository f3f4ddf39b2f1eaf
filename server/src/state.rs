// server/src/state.rs

use crate::repository::ProductRepository;
use std::sync::Arc;

/// Shared handler state. The repository sits behind a trait object so the
/// integration tests can assemble the app over the in-memory backend.
#[derive(Clone)]
pub struct AppState {
  pub repo: Arc<dyn ProductRepository>,
}

impl AppState {
  pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
    Self { repo }
  }
}
