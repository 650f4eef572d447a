//! Product Catalog Models
//!
//! Data structures mirroring the payloads served by the external product
//! catalog API. They are read-only to the storefront: fetched per request and
//! never mutated locally.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// Physical dimensions of a product
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A customer review attached to a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    pub comment: String,
    pub reviewer_name: String,

    /// ISO-8601 timestamp as served upstream
    pub date: String,
}

/// A product as served by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,

    /// Some upstream products (groceries mostly) have no brand
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub warranty_information: Option<String>,
    #[serde(default)]
    pub shipping_information: Option<String>,
    #[serde(default)]
    pub return_policy: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Unit price after applying the product's discount percentage.
    pub fn discounted_price(&self) -> f64 {
        discounted_price(self.price, self.discount_percentage)
    }
}

/// Applies a percentage discount to a unit price.
pub fn discounted_price(price: f64, discount_percentage: f64) -> f64 {
    price * (1.0 - discount_percentage / 100.0)
}

/// Envelope returned by every list endpoint of the catalog API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}
