// client/src/lib.rs

//! Client-side state store for the product shop API: a typed in-memory
//! cache of the product list, synchronized over HTTP, with subscribe/notify
//! hooks for UI re-render.

pub mod api;
pub mod store;

pub use api::{ApiError, Envelope, HttpApi, Product, ProductApi, ProductDraft};
pub use store::{ActionResult, ProductStore};
