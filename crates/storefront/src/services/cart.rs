//! The visitor's cart, persisted in the session.
//!
//! The whole store record is read and written under
//! [`STORE_NAMESPACE`] on every change, so a reload or a second tab sees
//! exactly what the last mutation left.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;
use tower_sessions::session::Error as SessionError;
use witherstex_core::{Cart, Product, ProductId, STORE_NAMESPACE};

use crate::error::AppError;
use crate::models::PersistedStore;

/// Cart bound to one visitor session.
#[derive(Clone)]
pub struct SessionCart {
    session: Session,
}

impl SessionCart {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    async fn load(&self) -> Result<PersistedStore, SessionError> {
        match self.session.get::<PersistedStore>(STORE_NAMESPACE).await {
            Ok(store) => Ok(store.unwrap_or_default()),
            // A record written by an older layout is dropped, not fatal.
            Err(SessionError::SerdeJson(e)) => {
                tracing::warn!(error = %e, "Discarding unreadable store record");
                Ok(PersistedStore::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Load, apply `change`, write back. Returns the updated cart.
    async fn mutate(&self, change: impl FnOnce(&mut Cart)) -> Result<Cart, SessionError> {
        let mut store = self.load().await?;
        change(&mut store.cart);
        self.session.insert(STORE_NAMESPACE, &store).await?;
        Ok(store.cart)
    }

    /// Current contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn cart(&self) -> Result<Cart, SessionError> {
        Ok(self.load().await?.cart)
    }

    /// Total packages in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn count(&self) -> Result<u64, SessionError> {
        Ok(self.cart().await?.count())
    }

    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn add(&self, product: Product, quantity: u32) -> Result<Cart, SessionError> {
        self.mutate(|cart| cart.add(product, quantity)).await
    }

    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn remove(&self, id: &ProductId) -> Result<Cart, SessionError> {
        self.mutate(|cart| cart.remove(id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn set_quantity(&self, id: &ProductId, quantity: i64) -> Result<Cart, SessionError> {
        self.mutate(|cart| cart.set_quantity(id, quantity)).await
    }

    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn clear(&self) -> Result<Cart, SessionError> {
        self.mutate(Cart::clear).await
    }
}

impl<S> FromRequestParts<S> for SessionCart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(Self::new)
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))
    }
}
