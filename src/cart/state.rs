//! Application State
//!
//! Shared state injected into every route: the per-session cart stores and
//! the product catalog.

use super::{models::CartView, store::CartStore};
use crate::{
    catalog::{HttpCatalog, ProductCatalog},
    config::CatalogConfig,
    error::CatalogError,
};
use dashmap::DashMap;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// A session's cart together with the time it was last used
#[derive(Debug)]
pub struct SessionCart {
    pub cart: CartStore,
    pub last_seen: Instant,
}

impl SessionCart {
    fn new() -> Self {
        Self {
            cart: CartStore::new(),
            last_seen: Instant::now(),
        }
    }
}

/// Core application state containing carts and the catalog client
pub struct AppState {
    /// In-memory carts, keyed by session id.
    /// DashMap locks per entry, so sessions never contend with each other.
    /// Entries are created only by mutating routes and removed once idle.
    pub carts: DashMap<String, SessionCart>,

    /// Source of product data
    pub catalog: Arc<dyn ProductCatalog>,

    /// Number of products shown on the home page
    pub featured_limit: u32,
}

impl AppState {
    /// Creates state backed by the HTTP catalog described by `config`
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let catalog = HttpCatalog::new(config)?;
        tracing::info!(base_url = %config.base_url, "using product catalog");
        Ok(Self::with_catalog(Arc::new(catalog), config.featured_limit))
    }

    /// Creates state backed by an arbitrary catalog implementation
    pub fn with_catalog(catalog: Arc<dyn ProductCatalog>, featured_limit: u32) -> Self {
        Self {
            carts: DashMap::new(),
            catalog,
            featured_limit,
        }
    }

    /// Runs `f` against the session's cart, creating an empty cart first if
    /// the session has none.
    pub fn with_cart<R>(&self, session_id: &str, f: impl FnOnce(&mut CartStore) -> R) -> R {
        let mut entry = self
            .carts
            .entry(session_id.to_string())
            .or_insert_with(SessionCart::new);
        entry.last_seen = Instant::now();
        f(&mut entry.cart)
    }

    /// Runs `f` against the session's cart if it exists. Never allocates a
    /// new entry.
    pub fn with_existing_cart<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut CartStore) -> R,
    ) -> Option<R> {
        let mut entry = self.carts.get_mut(session_id)?;
        entry.last_seen = Instant::now();
        Some(f(&mut entry.cart))
    }

    /// View of the session's cart; an empty view for unknown sessions.
    pub fn cart_view(&self, session_id: Option<&str>) -> CartView {
        session_id
            .and_then(|id| self.with_existing_cart(id, |cart| cart.view()))
            .unwrap_or_else(|| CartStore::new().view())
    }

    /// Drops carts not used within `idle_ttl` of `now`. Returns how many were
    /// removed.
    pub fn evict_idle_carts(&self, now: Instant, idle_ttl: Duration) -> usize {
        let before = self.carts.len();
        self.carts
            .retain(|_, session| now.saturating_duration_since(session.last_seen) < idle_ttl);
        before.saturating_sub(self.carts.len())
    }
}

/// Periodically evicts idle carts for as long as the runtime lives.
pub fn spawn_idle_cart_sweeper(
    state: SharedState,
    idle_ttl: Duration,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let evicted = state.evict_idle_carts(Instant::now(), idle_ttl);
            if evicted > 0 {
                tracing::info!(evicted, remaining = state.carts.len(), "evicted idle carts");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductPage};
    use async_trait::async_trait;

    struct EmptyCatalog;

    #[async_trait]
    impl ProductCatalog for EmptyCatalog {
        async fn list_products(&self, _: u32, _: u32) -> Result<ProductPage, CatalogError> {
            Ok(ProductPage::default())
        }

        async fn products_by_category(
            &self,
            _: &str,
            _: u32,
            _: u32,
        ) -> Result<ProductPage, CatalogError> {
            Ok(ProductPage::default())
        }

        async fn search_products(
            &self,
            _: &str,
            _: u32,
            _: u32,
        ) -> Result<ProductPage, CatalogError> {
            Ok(ProductPage::default())
        }

        async fn get_product(&self, id: u64) -> Result<Product, CatalogError> {
            Err(CatalogError::NotFound(id))
        }
    }

    fn state() -> AppState {
        AppState::with_catalog(Arc::new(EmptyCatalog), 8)
    }

    #[test]
    fn reading_unknown_session_allocates_nothing() {
        let state = state();

        for i in 0..100 {
            let view = state.cart_view(Some(&format!("session-{}", i)));
            assert_eq!(view.total_items, 0);
        }
        assert!(state.with_existing_cart("ghost", |cart| cart.remove_from_cart(1)).is_none());
        assert_eq!(state.cart_view(None).total_items, 0);

        assert!(state.carts.is_empty());
    }

    #[test]
    fn with_cart_creates_entry_once() {
        let state = state();
        state.with_cart("s1", |cart| cart.set_cart_open(true));
        state.with_cart("s1", |cart| cart.set_cart_open(false));

        assert_eq!(state.carts.len(), 1);
        assert!(!state.cart_view(Some("s1")).is_open);
    }

    #[test]
    fn evicts_only_idle_carts() {
        let state = state();
        state.with_cart("stale", |_| ());
        state.with_cart("fresh", |_| ());

        let start = Instant::now();
        if let Some(mut stale) = state.carts.get_mut("stale") {
            stale.last_seen = start;
        }
        if let Some(mut fresh) = state.carts.get_mut("fresh") {
            fresh.last_seen = start + Duration::from_secs(50);
        }

        let evicted = state.evict_idle_carts(start + Duration::from_secs(60), Duration::from_secs(30));

        assert_eq!(evicted, 1);
        assert!(state.carts.contains_key("fresh"));
        assert!(!state.carts.contains_key("stale"));
    }
}
