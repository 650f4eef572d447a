//! Storefront Library
//!
//! This library provides the core functionality of a storefront service:
//! product listings, category browsing, search and product detail backed by
//! an external catalog API, plus a per-session shopping cart.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod storefront;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
