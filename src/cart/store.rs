//! Shopping Cart Store
//!
//! A `CartStore` holds the lines of one shopper's cart and the visibility
//! flag of the cart panel. All operations are total: unknown product
//! identifiers are ignored and nothing here can fail.

use super::models::{CartLine, CartLineView, CartView};
use crate::catalog::{listing::format_price, Product};

/// Cart contents for a single session
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    /// Lines in insertion order, at most one per product id
    items: Vec<CartLine>,
    is_open: bool,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product`, merging with an existing line.
    ///
    /// No stock bound is enforced here. A zero quantity leaves the cart
    /// unchanged.
    pub fn add_to_cart(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(existing) = self.line_mut(product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartLine { product, quantity });
        }
    }

    /// Removes the line for `product_id`, if any.
    pub fn remove_from_cart(&mut self, product_id: u64) {
        self.items.retain(|line| line.product.id != product_id);
    }

    /// Sets the quantity of an existing line; zero or less removes it.
    pub fn update_quantity(&mut self, product_id: u64, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of discounted line totals.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartLine::line_total).sum()
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn is_cart_open(&self) -> bool {
        self.is_open
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the cart as rendered by the cart panel.
    pub fn view(&self) -> CartView {
        let total_price = self.total_price();
        CartView {
            items: self.items.iter().map(CartLineView::from).collect(),
            total_items: self.total_items(),
            total_price,
            formatted_subtotal: format_price(total_price),
            is_open: self.is_open,
        }
    }

    fn line_mut(&mut self, product_id: u64) -> Option<&mut CartLine> {
        self.items
            .iter_mut()
            .find(|line| line.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: u64, price: f64, discount_percentage: f64) -> Product {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("Product {}", id),
            "price": price,
            "discountPercentage": discount_percentage,
            "stock": 50,
        }))
        .unwrap()
    }

    #[test]
    fn adding_same_product_twice_merges_quantities() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, 10.0, 0.0), 2);
        cart.add_to_cart(product(1, 10.0, 0.0), 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn new_products_are_appended_in_order() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(2, 10.0, 0.0), 1);
        cart.add_to_cart(product(1, 10.0, 0.0), 1);

        let ids: Vec<u64> = cart.items().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn adding_zero_quantity_is_ignored() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, 10.0, 0.0), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_to_zero_removes_line() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, 10.0, 0.0), 2);
        cart.update_quantity(1, 0);
        assert!(cart.is_empty());

        cart.add_to_cart(product(1, 10.0, 0.0), 2);
        cart.update_quantity(1, -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_sets_value_without_clamping() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, 10.0, 0.0), 2);
        cart.update_quantity(1, 500);
        assert_eq!(cart.items()[0].quantity, 500);
    }

    #[test]
    fn update_quantity_on_missing_line_is_noop() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, 10.0, 0.0), 2);
        cart.update_quantity(99, 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn remove_absent_product_is_noop() {
        let mut cart = CartStore::new();
        cart.remove_from_cart(42);
        assert!(cart.is_empty());

        cart.add_to_cart(product(1, 10.0, 0.0), 1);
        cart.remove_from_cart(42);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn total_price_uses_discounted_unit_price() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, 100.0, 10.0), 2);
        assert!((cart.total_price() - 180.0).abs() < 1e-9);

        cart.add_to_cart(product(2, 20.0, 50.0), 1);
        assert!((cart.total_price() - 190.0).abs() < 1e-9);
    }

    #[test]
    fn total_items_sums_quantities() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, 1.0, 0.0), 2);
        cart.add_to_cart(product(2, 1.0, 0.0), 3);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn open_flag_is_independent_of_contents() {
        let mut cart = CartStore::new();
        assert!(!cart.is_cart_open());

        cart.set_cart_open(true);
        cart.add_to_cart(product(1, 1.0, 0.0), 1);
        cart.remove_from_cart(1);
        assert!(cart.is_cart_open());
    }

    #[test]
    fn view_reports_formatted_subtotal() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product(1, 100.0, 10.0), 2);

        let view = cart.view();
        assert_eq!(view.total_items, 2);
        assert_eq!(view.formatted_subtotal, "$180.00");
        assert_eq!(view.items[0].formatted_price, "$90.00");
    }
}
