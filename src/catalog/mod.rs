//! Product Catalog Module
//!
//! This module wraps the external product catalog API, including:
//! - Catalog models (Product, Review, ProductPage)
//! - The `ProductCatalog` trait and its HTTP implementation
//! - Listing helpers (sorting, pagination, stock and price presentation)

pub mod client;
pub mod listing;
pub mod models;

// Re-export commonly used types for convenience
pub use client::{HttpCatalog, ProductCatalog};
pub use models::{Product, ProductPage};
