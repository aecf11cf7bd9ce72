//! Cache types for catalogue reads.

use witherstex_core::Product;

/// Cache key for catalogue resources.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Products,
    ProductBySlug(String),
}

/// Cached value types.
///
/// A slug lookup that found nothing is cached as `Product(None)` so repeated
/// visits to a dead link do not hit the backend.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Vec<Product>),
    Product(Option<Box<Product>>),
}
