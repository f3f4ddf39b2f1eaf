// server/src/models/mod.rs

//! Data structures representing stored entities and their input drafts.

pub mod product;

pub use product::{Product, ProductDraft};
