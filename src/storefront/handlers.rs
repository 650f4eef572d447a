//! Storefront route handlers
//!
//! JSON endpoints backing the home, category, search and product detail
//! screens. Listing failures are logged and degrade to empty results.

use super::models::*;
use crate::{
    cart::state::SharedState,
    catalog::listing::{
        category_display_name, clamp_requested_quantity, format_price, page_skip,
        sort_products, SortOrder, StockStatus, NAV_CATEGORIES, PRODUCTS_PER_PAGE,
    },
    error::ApiError,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use futures_util::future::{join, join_all};

const CATEGORY_SORTS: [SortOrder; 4] = [
    SortOrder::Title,
    SortOrder::PriceLow,
    SortOrder::PriceHigh,
    SortOrder::Rating,
];

const SEARCH_SORTS: [SortOrder; 5] = [
    SortOrder::Relevance,
    SortOrder::Title,
    SortOrder::PriceLow,
    SortOrder::PriceHigh,
    SortOrder::Rating,
];

/// Creates routes for the storefront screens
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/home", get(home))
        .route("/api/category/:slug", get(category))
        .route("/api/search", get(search))
        .route("/api/product/:id", get(product_detail))
}

/// Endpoint: GET /api/home
/// Featured products plus the navigation categories with their product
/// counts, fetched concurrently.
async fn home(State(state): State<SharedState>) -> Json<HomePage> {
    let featured = async {
        match state.catalog.list_products(state.featured_limit, 0).await {
            Ok(page) => page
                .products
                .into_iter()
                .map(ProductCard::from)
                .collect::<Vec<_>>(),
            Err(e) => {
                tracing::error!("Error fetching featured products: {}", e);
                Vec::new()
            }
        }
    };

    let counts = join_all(NAV_CATEGORIES.iter().map(|&category| {
        let catalog = state.catalog.clone();
        async move {
            match catalog.products_by_category(category.slug, 1, 0).await {
                Ok(page) => page.total,
                Err(e) => {
                    tracing::warn!("Error counting category {}: {}", category.slug, e);
                    0
                }
            }
        }
    }));

    let (featured, counts) = join(featured, counts).await;

    let categories: Vec<CategorySummary> = NAV_CATEGORIES
        .iter()
        .zip(counts)
        .map(|(category, count)| CategorySummary::new(category.slug, count))
        .collect();

    Json(HomePage {
        featured,
        categories,
    })
}

/// Endpoint: GET /api/category/:slug
async fn category(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Json<ListingPage> {
    let page = query.page();
    let sort = query.sort_or(SortOrder::Title);
    let title = category_display_name(&slug);

    let listing = match state
        .catalog
        .products_by_category(&slug, PRODUCTS_PER_PAGE, page_skip(page))
        .await
    {
        Ok(mut fetched) => {
            sort_products(&mut fetched.products, sort);
            ListingPage::new(title, fetched, page, sort, &CATEGORY_SORTS)
        }
        Err(e) => {
            tracing::error!("Error fetching products for category {}: {}", slug, e);
            ListingPage::empty(title, page, sort, &CATEGORY_SORTS)
        }
    };

    Json(listing)
}

/// Endpoint: GET /api/search?q=
/// A blank query yields an empty listing without contacting the catalog.
async fn search(
    State(state): State<SharedState>,
    Query(query): Query<ListingQuery>,
) -> Json<ListingPage> {
    let page = query.page();
    let sort = query.sort_or(SortOrder::Relevance);
    let term = query.q.trim().to_string();

    if term.is_empty() {
        return Json(ListingPage::empty(term, page, sort, &SEARCH_SORTS));
    }

    let listing = match state
        .catalog
        .search_products(&term, PRODUCTS_PER_PAGE, page_skip(page))
        .await
    {
        Ok(mut fetched) => {
            sort_products(&mut fetched.products, sort);
            ListingPage::new(term, fetched, page, sort, &SEARCH_SORTS)
        }
        Err(e) => {
            tracing::error!("Error fetching search results for {:?}: {}", term, e);
            ListingPage::empty(term, page, sort, &SEARCH_SORTS)
        }
    };

    Json(listing)
}

/// Endpoint: GET /api/product/:id
async fn product_detail(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<ProductDetail>, ApiError> {
    let product = state.catalog.get_product(id).await.map_err(|e| {
        tracing::error!("Error fetching product {}: {}", id, e);
        ApiError::from(e)
    })?;

    let stock_status = StockStatus::of(&product);
    let discounted_price = product.discounted_price();

    Ok(Json(ProductDetail {
        discounted_price,
        formatted_price: format_price(discounted_price),
        stock_label: stock_status.label(),
        stock_status,
        max_quantity: clamp_requested_quantity(&product, product.stock).unwrap_or(0),
        category_name: category_display_name(&product.category),
        product,
    }))
}
