//! Storefront Response Models
//!
//! JSON views served to the storefront screens.

use crate::catalog::{
    listing::{
        category_display_name, is_low_stock, page_links, parse_page, total_pages, SortOrder,
        StockStatus, PRODUCTS_PER_PAGE,
    },
    models::{Product, ProductPage},
};
use serde::{Deserialize, Serialize};

/// Query string of the listing routes.
///
/// Values are kept raw so that a malformed `page` or `sort` falls back to
/// the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub q: String,
    pub page: Option<String>,
    pub sort: Option<String>,
}

impl ListingQuery {
    /// Requested page, 1 when missing or invalid.
    pub fn page(&self) -> u32 {
        parse_page(self.page.as_deref())
    }

    /// Requested sort order, `default` when missing or unknown.
    pub fn sort_or(&self, default: SortOrder) -> SortOrder {
        self.sort
            .as_deref()
            .and_then(SortOrder::from_param)
            .unwrap_or(default)
    }
}

/// A product as shown on a product card
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    #[serde(flatten)]
    pub product: Product,
    pub discounted_price: f64,
    pub low_stock: bool,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        Self {
            discounted_price: product.discounted_price(),
            low_stock: is_low_stock(&product),
            product,
        }
    }
}

/// Sort option offered by the sort selector
#[derive(Debug, Serialize)]
pub struct SortOption {
    pub value: SortOrder,
    pub label: &'static str,
}

impl From<SortOrder> for SortOption {
    fn from(value: SortOrder) -> Self {
        Self {
            value,
            label: value.label(),
        }
    }
}

/// One page of a category or search listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    /// Category display name or the search query
    pub title: String,
    pub products: Vec<ProductCard>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u64,
    pub page_links: Vec<u64>,
    pub sort: SortOrder,
    pub sort_options: Vec<SortOption>,
}

impl ListingPage {
    /// Builds a listing from an already sorted catalog page.
    pub fn new(
        title: String,
        fetched: ProductPage,
        page: u32,
        sort: SortOrder,
        sort_options: &[SortOrder],
    ) -> Self {
        let pages = total_pages(fetched.total);
        Self {
            title,
            products: fetched.products.into_iter().map(ProductCard::from).collect(),
            total: fetched.total,
            page,
            per_page: PRODUCTS_PER_PAGE,
            total_pages: pages,
            page_links: page_links(pages),
            sort,
            sort_options: sort_options.iter().copied().map(SortOption::from).collect(),
        }
    }

    /// An empty listing, used when nothing could be fetched.
    pub fn empty(title: String, page: u32, sort: SortOrder, sort_options: &[SortOrder]) -> Self {
        Self::new(title, ProductPage::default(), page, sort, sort_options)
    }
}

/// A category tile on the home page
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub slug: String,
    pub count: u64,
}

impl CategorySummary {
    pub fn new(slug: &str, count: u64) -> Self {
        Self {
            name: category_display_name(slug),
            slug: slug.to_string(),
            count,
        }
    }
}

/// Data of the home page
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub featured: Vec<ProductCard>,
    pub categories: Vec<CategorySummary>,
}

/// Data of the product detail page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: Product,
    pub discounted_price: f64,
    pub formatted_price: String,
    pub stock_status: StockStatus,
    pub stock_label: String,

    /// Upper bound of the quantity selector; 0 disables "Add to Cart"
    pub max_quantity: u32,
    pub category_name: String,
}
