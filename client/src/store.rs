// client/src/store.rs

//! The client-side product cache: an explicit state container injected into
//! UI components, mirroring the server's collection through the four API
//! operations. Views register re-render callbacks with [`ProductStore::subscribe`];
//! every confirmed cache mutation notifies them.

use parking_lot::{Mutex, RwLock};
use tracing::warn;

use crate::api::{Envelope, Product, ProductApi, ProductDraft};

type Subscriber = Box<dyn Fn() + Send + Sync>;

/// What every store operation resolves to. Faults (transport, decode,
/// non-2xx) are converted into a failure result here and never propagate to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
  pub success: bool,
  pub message: String,
}

impl ActionResult {
  fn ok(message: &str) -> Self {
    Self {
      success: true,
      message: message.to_string(),
    }
  }

  fn fail(message: &str) -> Self {
    Self {
      success: false,
      message: message.to_string(),
    }
  }
}

pub struct ProductStore<A: ProductApi> {
  api: A,
  products: RwLock<Vec<Product>>,
  subscribers: Mutex<Vec<Subscriber>>,
}

impl<A: ProductApi> ProductStore<A> {
  pub fn new(api: A) -> Self {
    Self {
      api,
      products: RwLock::new(Vec::new()),
      subscribers: Mutex::new(Vec::new()),
    }
  }

  /// Snapshot of the cached list, in server order.
  pub fn products(&self) -> Vec<Product> {
    self.products.read().clone()
  }

  /// Register a re-render callback, invoked after every cache mutation.
  pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) {
    self.subscribers.lock().push(Box::new(callback));
  }

  fn notify(&self) {
    for subscriber in self.subscribers.lock().iter() {
      subscriber();
    }
  }

  /// Replace the whole cached sequence with the server's list. A full
  /// overwrite: unconfirmed local state is discarded.
  pub async fn fetch_all(&self) -> ActionResult {
    match self.api.list().await {
      Ok(Envelope { data: Some(products), .. }) => {
        *self.products.write() = products;
        self.notify();
        ActionResult::ok("Products fetched successfully")
      }
      Ok(_) => {
        warn!("List response carried no data.");
        ActionResult::fail("Failed to fetch products")
      }
      Err(e) => {
        warn!(error = %e, "Failed to fetch products.");
        ActionResult::fail("Failed to fetch products")
      }
    }
  }

  /// Create a product and append the confirmed entity to the cache. Fails
  /// fast, without a request, when any field is unfilled (an empty name or
  /// image, or a zero price).
  pub async fn create(&self, draft: ProductDraft) -> ActionResult {
    if draft.name.is_empty() || draft.image.is_empty() || draft.price == 0.0 {
      return ActionResult::fail("Please fill all fields");
    }

    match self.api.create(&draft).await {
      Ok(Envelope { data: Some(product), .. }) => {
        self.products.write().push(product);
        self.notify();
        ActionResult::ok("Product created successfully")
      }
      Ok(_) => {
        warn!("Create response carried no product.");
        ActionResult::fail("Failed to create product")
      }
      Err(e) => {
        warn!(error = %e, "Failed to create product.");
        ActionResult::fail("Failed to create product")
      }
    }
  }

  /// Delete a product and drop it from the cache (a no-op if it is not
  /// cached).
  pub async fn delete(&self, id: &str) -> ActionResult {
    match self.api.delete(id).await {
      Ok(_) => {
        self.products.write().retain(|p| p.id != id);
        self.notify();
        ActionResult::ok("Product deleted successfully")
      }
      Err(e) => {
        warn!(error = %e, "Failed to delete product.");
        ActionResult::fail("Failed to delete product")
      }
    }
  }

  /// Replace the cached entry with the server-returned product; other
  /// entries are untouched. When the server matched nothing (null data) the
  /// cache is left as-is.
  pub async fn update(&self, id: &str, draft: ProductDraft) -> ActionResult {
    match self.api.update(id, &draft).await {
      Ok(Envelope { data: Some(updated), .. }) => {
        {
          let mut products = self.products.write();
          if let Some(entry) = products.iter_mut().find(|p| p.id == id) {
            *entry = updated;
          }
        }
        self.notify();
        ActionResult::ok("Product updated successfully")
      }
      Ok(_) => {
        warn!("Update matched no product on the server.");
        ActionResult::ok("Product updated successfully")
      }
      Err(e) => {
        warn!(error = %e, "Failed to update product.");
        ActionResult::fail("Failed to update product")
      }
    }
  }
}