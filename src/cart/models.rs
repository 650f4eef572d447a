//! Shopping Cart Domain Models
//!
//! This module contains the data structures of the shopping cart domain and
//! the request/response bodies of the cart routes.

use crate::catalog::{listing::format_price, Product};
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart additions
fn default_quantity() -> u32 {
    1
}

/// One product held in the cart together with its quantity
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product as fetched when it was first added
    pub product: Product,

    /// Always at least 1
    pub quantity: u32,
}

impl CartLine {
    /// Discounted unit price times quantity.
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.product.discounted_price()
    }
}

// =============================================================================
// Route Bodies
// =============================================================================

/// Body of `POST /api/cart/items`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    pub product_id: u64,

    /// Requested quantity (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Clamp the quantity to the product's stock and refuse out-of-stock
    /// products, as the product page does. Product cards add without
    /// checking stock and send `false`.
    #[serde(default = "default_clamp_to_stock")]
    pub clamp_to_stock: bool,
}

fn default_clamp_to_stock() -> bool {
    true
}

/// Body of `PATCH /api/cart/items/:id`
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityInput {
    /// Zero or negative removes the line
    pub quantity: i64,
}

/// Body of `PUT /api/cart/open`
#[derive(Debug, Deserialize)]
pub struct CartOpenInput {
    pub open: bool,
}

/// A cart line as rendered by the cart panel
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: u64,
    pub title: String,
    pub brand: Option<String>,
    pub thumbnail: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub discount_percentage: f64,
    pub discounted_price: f64,
    pub line_total: f64,
    pub formatted_price: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let discounted_price = line.product.discounted_price();
        Self {
            product_id: line.product.id,
            title: line.product.title.clone(),
            brand: line.product.brand.clone(),
            thumbnail: line.product.thumbnail.clone(),
            quantity: line.quantity,
            unit_price: line.product.price,
            discount_percentage: line.product.discount_percentage,
            discounted_price,
            line_total: line.line_total(),
            formatted_price: format_price(discounted_price),
        }
    }
}

/// Full cart state returned by every cart route
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total_items: u64,
    pub total_price: f64,
    pub formatted_subtotal: String,
    pub is_open: bool,
}
