//! Storefront Module
//!
//! JSON routes behind the storefront screens:
//! - Home page (featured products, category tiles)
//! - Category and search listings (sorted, paginated)
//! - Product detail

pub mod handlers;
pub mod models;

pub use handlers::routes;
