//! Product Catalog Client
//!
//! `ProductCatalog` is the seam between the storefront routes and the
//! external catalog API. `HttpCatalog` is the production implementation.

use super::models::{Product, ProductPage};
use crate::{config::CatalogConfig, error::CatalogError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Read access to the external product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// `GET /products?limit=&skip=`
    async fn list_products(&self, limit: u32, skip: u32) -> Result<ProductPage, CatalogError>;

    /// `GET /products/category/{slug}?limit=&skip=`
    async fn products_by_category(
        &self,
        slug: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, CatalogError>;

    /// `GET /products/search?q=&limit=&skip=`
    async fn search_products(
        &self,
        query: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, CatalogError>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: u64) -> Result<Product, CatalogError>;
}

/// Catalog backed by the public REST API.
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| CatalogError::InvalidBaseUrl(config.base_url.clone()))?;

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Returns the URL of `/products` followed by `segments`, each encoded
    /// as a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("products").extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        tracing::debug!(%url, ?query, "catalog request");

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }

    fn page_query(limit: u32, skip: u32) -> Vec<(&'static str, String)> {
        vec![("limit", limit.to_string()), ("skip", skip.to_string())]
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    async fn list_products(&self, limit: u32, skip: u32) -> Result<ProductPage, CatalogError> {
        self.fetch(self.endpoint(&[]), &Self::page_query(limit, skip))
            .await
    }

    async fn products_by_category(
        &self,
        slug: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, CatalogError> {
        self.fetch(
            self.endpoint(&["category", slug]),
            &Self::page_query(limit, skip),
        )
        .await
    }

    async fn search_products(
        &self,
        query: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, CatalogError> {
        // reqwest form-encodes query values
        let mut params = vec![("q", query.to_string())];
        params.extend(Self::page_query(limit, skip));
        self.fetch(self.endpoint(&["search"]), &params).await
    }

    async fn get_product(&self, id: u64) -> Result<Product, CatalogError> {
        let id_segment = id.to_string();
        match self.fetch(self.endpoint(&[&id_segment]), &[]).await {
            Err(CatalogError::Status(code)) if code == StatusCode::NOT_FOUND.as_u16() => {
                Err(CatalogError::NotFound(id))
            }
            other => other,
        }
    }
}
