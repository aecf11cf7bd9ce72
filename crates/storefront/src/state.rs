//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::StorefrontConfig;
use crate::supabase::{AuthClient, CatalogueClient, StorageClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration, the session database and the backend clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    catalogue: CatalogueClient,
    storage: StorageClient,
    auth: AuthClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Self {
        let catalogue = CatalogueClient::new(&config.supabase);
        let storage = StorageClient::new(&config.supabase);
        let auth = AuthClient::new(&config.supabase);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalogue,
                storage,
                auth,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Session database pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    #[must_use]
    pub fn catalogue(&self) -> &CatalogueClient {
        &self.inner.catalogue
    }

    #[must_use]
    pub fn storage(&self) -> &StorageClient {
        &self.inner.storage
    }

    #[must_use]
    pub fn auth(&self) -> &AuthClient {
        &self.inner.auth
    }
}
