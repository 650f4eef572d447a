//! Listing Helpers
//!
//! Sorting, page arithmetic and presentation helpers shared by the category,
//! search and home routes.

use super::models::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Products shown per listing page
pub const PRODUCTS_PER_PAGE: u32 = 12;
/// Maximum number of page buttons offered by the page selector
pub const MAX_PAGE_LINKS: u32 = 5;
/// Stock above which a product is simply "In Stock"
pub const IN_STOCK_THRESHOLD: u32 = 10;

/// A category shown in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavCategory {
    pub name: &'static str,
    pub slug: &'static str,
}

/// Categories offered in the navigation bar, in display order
pub const NAV_CATEGORIES: [NavCategory; 4] = [
    NavCategory {
        name: "Beauty",
        slug: "beauty",
    },
    NavCategory {
        name: "Groceries",
        slug: "groceries",
    },
    NavCategory {
        name: "Home & Garden",
        slug: "home-decoration",
    },
    NavCategory {
        name: "Electronics",
        slug: "smartphones",
    },
];

// =============================================================================
// Sorting
// =============================================================================

/// Sort options offered on listing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the order returned by the catalog
    Relevance,
    /// Name (A-Z)
    Title,
    /// Price (Low to High)
    PriceLow,
    /// Price (High to Low)
    PriceHigh,
    /// Rating (High to Low)
    Rating,
}

impl SortOrder {
    /// Human readable label for the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevance",
            SortOrder::Title => "Name (A-Z)",
            SortOrder::PriceLow => "Price (Low to High)",
            SortOrder::PriceHigh => "Price (High to Low)",
            SortOrder::Rating => "Rating (High to Low)",
        }
    }

    /// Parses a `sort` query value; unknown values yield `None`.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim() {
            "relevance" => Some(SortOrder::Relevance),
            "title" => Some(SortOrder::Title),
            "price-low" => Some(SortOrder::PriceLow),
            "price-high" => Some(SortOrder::PriceHigh),
            "rating" => Some(SortOrder::Rating),
            _ => None,
        }
    }
}

/// Sorts one fetched page of products in place. The sort is stable, so
/// products comparing equal keep their upstream order.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::Relevance => {}
        SortOrder::Title => products.sort_by(compare_titles),
        SortOrder::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

fn compare_titles(a: &Product, b: &Product) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}

// =============================================================================
// Pagination
// =============================================================================

/// Normalises a requested page number (pages start at 1).
pub fn normalize_page(page: Option<u32>) -> u32 {
    page.unwrap_or(1).max(1)
}

/// Parses a `page` query value, falling back to page 1 when it is missing
/// or not a number.
pub fn parse_page(raw: Option<&str>) -> u32 {
    normalize_page(raw.and_then(|p| p.trim().parse().ok()))
}

/// Number of products to skip to reach `page`.
pub fn page_skip(page: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(PRODUCTS_PER_PAGE)
}

/// Total number of pages needed for `total` products.
pub fn total_pages(total: u64) -> u64 {
    total.div_ceil(u64::from(PRODUCTS_PER_PAGE))
}

/// Page numbers offered by the page selector.
pub fn page_links(total_pages: u64) -> Vec<u64> {
    (1..=total_pages.min(u64::from(MAX_PAGE_LINKS))).collect()
}

// =============================================================================
// Presentation
// =============================================================================

/// Display name for a category slug.
pub fn category_display_name(slug: &str) -> String {
    if let Some(category) = NAV_CATEGORIES.iter().find(|c| c.slug == slug) {
        return category.name.to_string();
    }

    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Availability of a product as shown to shoppers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum StockStatus {
    InStock,
    LimitedStock { remaining: u32 },
    OutOfStock,
}

impl StockStatus {
    pub fn of(product: &Product) -> Self {
        match product.stock {
            0 => StockStatus::OutOfStock,
            n if n > IN_STOCK_THRESHOLD => StockStatus::InStock,
            n => StockStatus::LimitedStock { remaining: n },
        }
    }

    pub fn label(&self) -> String {
        match self {
            StockStatus::InStock => "In Stock".to_string(),
            StockStatus::LimitedStock { remaining } => format!("Only {} left", remaining),
            StockStatus::OutOfStock => "Out of Stock".to_string(),
        }
    }
}

/// Whether the product card shows a "Low Stock" badge.
pub fn is_low_stock(product: &Product) -> bool {
    product.stock < IN_STOCK_THRESHOLD
}

/// Clamps a quantity requested on the product page to `1..=stock`.
///
/// Returns `None` when the product is out of stock.
pub fn clamp_requested_quantity(product: &Product, requested: u32) -> Option<u32> {
    if product.stock == 0 {
        return None;
    }
    Some(requested.clamp(1, product.stock))
}

/// Formats an amount as US dollars, e.g. `$1,234.50`.
pub fn format_price(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: u64, title: &str, price: f64, rating: f64, stock: u32) -> Product {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "price": price,
            "rating": rating,
            "stock": stock,
        }))
        .unwrap()
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "mascara", 9.99, 4.9, 5),
            product(2, "Lipstick", 19.99, 2.5, 20),
            product(3, "Eyeshadow", 4.99, 4.9, 0),
        ]
    }

    #[test]
    fn sorts_by_title_case_insensitively() {
        let mut products = sample();
        sort_products(&mut products, SortOrder::Title);
        assert_eq!(ids(&products), vec![3, 2, 1]);
    }

    #[test]
    fn sorts_by_price_both_ways() {
        let mut products = sample();
        sort_products(&mut products, SortOrder::PriceLow);
        assert_eq!(ids(&products), vec![3, 1, 2]);

        sort_products(&mut products, SortOrder::PriceHigh);
        assert_eq!(ids(&products), vec![2, 1, 3]);
    }

    #[test]
    fn rating_sort_is_stable_for_ties() {
        let mut products = sample();
        sort_products(&mut products, SortOrder::Rating);
        assert_eq!(ids(&products), vec![1, 3, 2]);
    }

    #[test]
    fn relevance_keeps_upstream_order() {
        let mut products = sample();
        sort_products(&mut products, SortOrder::Relevance);
        assert_eq!(ids(&products), vec![1, 2, 3]);
    }

    #[test]
    fn sort_order_uses_kebab_case_names() {
        let order: SortOrder = serde_json::from_value(json!("price-low")).unwrap();
        assert_eq!(order, SortOrder::PriceLow);
        assert_eq!(SortOrder::PriceHigh.label(), "Price (High to Low)");
    }

    #[test]
    fn sort_param_parsing_ignores_unknown_values() {
        assert_eq!(SortOrder::from_param("rating"), Some(SortOrder::Rating));
        assert_eq!(SortOrder::from_param(" price-high "), Some(SortOrder::PriceHigh));
        assert_eq!(SortOrder::from_param("bogus"), None);
        assert_eq!(SortOrder::from_param(""), None);
    }

    #[test]
    fn page_param_parsing_falls_back_to_first_page() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("-2")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(None), 1);
    }

    #[test]
    fn page_arithmetic() {
        assert_eq!(normalize_page(None), 1);
        assert_eq!(normalize_page(Some(0)), 1);
        assert_eq!(page_skip(1), 0);
        assert_eq!(page_skip(3), 24);
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(12), 1);
        assert_eq!(total_pages(13), 2);
        assert_eq!(page_links(2), vec![1, 2]);
        assert_eq!(page_links(9), vec![1, 2, 3, 4, 5]);
        assert!(page_links(0).is_empty());
    }

    #[test]
    fn category_names_use_known_labels_or_capitalize() {
        assert_eq!(category_display_name("home-decoration"), "Home & Garden");
        assert_eq!(category_display_name("smartphones"), "Electronics");
        assert_eq!(category_display_name("laptops"), "Laptops");
        assert_eq!(category_display_name(""), "");
    }

    #[test]
    fn stock_status_thresholds() {
        assert_eq!(StockStatus::of(&product(1, "a", 1.0, 1.0, 0)), StockStatus::OutOfStock);
        assert_eq!(
            StockStatus::of(&product(1, "a", 1.0, 1.0, 10)),
            StockStatus::LimitedStock { remaining: 10 }
        );
        assert_eq!(StockStatus::of(&product(1, "a", 1.0, 1.0, 11)), StockStatus::InStock);
        assert_eq!(StockStatus::LimitedStock { remaining: 3 }.label(), "Only 3 left");
        assert!(is_low_stock(&product(1, "a", 1.0, 1.0, 9)));
        assert!(!is_low_stock(&product(1, "a", 1.0, 1.0, 10)));
    }

    #[test]
    fn clamps_requested_quantity_to_stock() {
        let item = product(1, "a", 1.0, 1.0, 4);
        assert_eq!(clamp_requested_quantity(&item, 10), Some(4));
        assert_eq!(clamp_requested_quantity(&item, 0), Some(1));
        assert_eq!(clamp_requested_quantity(&item, 2), Some(2));
        assert_eq!(clamp_requested_quantity(&product(2, "b", 1.0, 1.0, 0), 1), None);
    }

    #[test]
    fn formats_prices_as_dollars() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(format_price(180.0), "$180.00");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_price(-2.25), "-$2.25");
    }
}
