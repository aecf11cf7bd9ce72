//! Catalogue access over the `products` REST table.
//!
//! Reads are cached with `moka` (5-minute TTL). Any successful mutation
//! drops every cached catalogue entry; failed mutations leave the cache as
//! it was.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::Method;
use tracing::{debug, instrument};
use url::Url;
use witherstex_core::{NewProduct, Product, ProductId, ProductUpdate};

use super::cache::{CacheKey, CacheValue};
use super::rows::{ProductRow, into_products};
use super::{Backend, SupabaseError};
use crate::config::SupabaseConfig;

const PRODUCTS_PATH: &str = "rest/v1/products";

/// Client for the hosted `products` table.
#[derive(Clone)]
pub struct CatalogueClient {
    inner: Arc<CatalogueClientInner>,
}

struct CatalogueClientInner {
    backend: Backend,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogueClient {
    /// Create a new catalogue client.
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300))
            .build();

        Self {
            inner: Arc::new(CatalogueClientInner {
                backend: Backend::new(config),
                cache,
            }),
        }
    }

    /// `products` endpoint with `filters` appended as query pairs.
    fn products_url(&self, filters: &[(&str, &str)]) -> Result<Url, SupabaseError> {
        let mut url = self.inner.backend.endpoint(PRODUCTS_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            for (key, value) in filters {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// All products, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a row is corrupt.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, SupabaseError> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for product list");
            return Ok(products);
        }

        let url = self.products_url(&[("order", "created_at.asc")])?;
        let request = self.inner.backend.request(Method::GET, url, None);
        let rows: Vec<ProductRow> = self.inner.backend.send_json(request).await?;
        let products = into_products(rows)?;

        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// The product published under `slug`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the row is corrupt. An
    /// unknown slug is `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>, SupabaseError> {
        let cache_key = CacheKey::ProductBySlug(slug.to_owned());

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(product.map(|p| *p));
        }

        let filter = format!("eq.{slug}");
        let url = self.products_url(&[("slug", filter.as_str()), ("limit", "1")])?;
        let request = self.inner.backend.request(Method::GET, url, None);
        let rows: Vec<ProductRow> = self.inner.backend.send_json(request).await?;
        let product = rows.into_iter().next().map(Product::try_from).transpose()?;

        self.inner
            .cache
            .insert(
                cache_key,
                CacheValue::Product(product.clone().map(Box::new)),
            )
            .await;

        Ok(product)
    }

    /// Look a product up by id in the (cached) product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    pub async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, SupabaseError> {
        Ok(self
            .list_products()
            .await?
            .into_iter()
            .find(|product| &product.id == id))
    }

    /// Insert a product; the backend assigns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the insert (for instance a
    /// duplicate slug or a caller without the admin role).
    #[instrument(skip(self, product, access_token), fields(slug = %product.slug))]
    pub async fn create_product(
        &self,
        product: &NewProduct,
        access_token: &str,
    ) -> Result<Product, SupabaseError> {
        let url = self.products_url(&[])?;
        let request = self
            .inner
            .backend
            .request(Method::POST, url, Some(access_token))
            .header("Prefer", "return=representation")
            .json(product);

        let rows: Vec<ProductRow> = self.inner.backend.send_json(request).await?;
        let created = rows
            .into_iter()
            .next()
            .ok_or_else(|| SupabaseError::NotFound("inserted product not returned".to_string()))?;

        self.invalidate();
        Product::try_from(created)
    }

    /// Apply `update` to the product `id`. Only the provided fields are sent.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError::NotFound`] when no row matched (unknown id, or
    /// hidden from the caller by row-level security).
    #[instrument(skip(self, update, access_token), fields(id = %id))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        update: &ProductUpdate,
        access_token: &str,
    ) -> Result<Product, SupabaseError> {
        let filter = format!("eq.{id}");
        let url = self.products_url(&[("id", filter.as_str())])?;
        let request = self
            .inner
            .backend
            .request(Method::PATCH, url, Some(access_token))
            .header("Prefer", "return=representation")
            .json(update);

        let rows: Vec<ProductRow> = self.inner.backend.send_json(request).await?;
        let updated = rows
            .into_iter()
            .next()
            .ok_or_else(|| SupabaseError::NotFound(format!("product {id}")))?;

        self.invalidate();
        Product::try_from(updated)
    }

    /// Delete the product `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError::NotFound`] when no row was deleted.
    #[instrument(skip(self, access_token), fields(id = %id))]
    pub async fn delete_product(
        &self,
        id: &ProductId,
        access_token: &str,
    ) -> Result<(), SupabaseError> {
        let filter = format!("eq.{id}");
        let url = self.products_url(&[("id", filter.as_str())])?;
        let request = self
            .inner
            .backend
            .request(Method::DELETE, url, Some(access_token))
            .header("Prefer", "return=representation");

        let rows: Vec<serde_json::Value> = self.inner.backend.send_json(request).await?;
        if rows.is_empty() {
            return Err(SupabaseError::NotFound(format!("product {id}")));
        }

        self.invalidate();
        Ok(())
    }

    /// Drop every cached catalogue entry.
    pub fn invalidate(&self) {
        self.inner.cache.invalidate_all();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::config::tests::test_config;

    fn unreachable_client() -> CatalogueClient {
        let mut config = test_config().supabase;
        // Nothing listens on the discard port.
        config.url = Url::parse("http://127.0.0.1:9/").unwrap();
        config.anon_key = SecretString::from("anon");
        CatalogueClient::new(&config)
    }

    #[test]
    fn test_products_url_encodes_filters() {
        let client = CatalogueClient::new(&test_config().supabase);
        let url = client
            .products_url(&[("slug", "eq.gant nitrile"), ("limit", "1")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://witherstex.supabase.co/rest/v1/products?select=*&slug=eq.gant+nitrile&limit=1"
        );
    }

    #[tokio::test]
    async fn test_invalidate_drops_cached_entries() {
        let client = unreachable_client();
        client
            .inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(Vec::new()))
            .await;

        assert!(client.list_products().await.unwrap().is_empty());

        client.invalidate();
        assert!(client.inner.cache.get(&CacheKey::Products).await.is_none());
    }

    #[tokio::test]
    async fn test_cached_missing_slug_is_none() {
        let client = unreachable_client();
        client
            .inner
            .cache
            .insert(
                CacheKey::ProductBySlug("ghost".to_string()),
                CacheValue::Product(None),
            )
            .await;

        assert!(client.get_product_by_slug("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_cache() {
        let client = unreachable_client();
        client
            .inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(Vec::new()))
            .await;

        let result = client
            .delete_product(&ProductId::new("1"), "token")
            .await;
        assert!(matches!(result, Err(SupabaseError::Http(_))));
        assert!(client.inner.cache.get(&CacheKey::Products).await.is_some());
    }
}
