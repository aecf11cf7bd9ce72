//! Session-related types.
//!
//! Types stored in the session for the visitor's store record and the
//! admin sign-in state.

use serde::{Deserialize, Serialize};
use witherstex_core::{Cart, UserId};

use crate::supabase::AuthSession;

/// Session keys.
///
/// The store record lives under [`witherstex_core::STORE_NAMESPACE`].
pub mod keys {
    /// Key for the visitor's display language.
    pub const LANGUAGE: &str = "language";

    /// Key for the notification shown on the next rendered page.
    pub const TOAST: &str = "toast";

    /// Key for the signed-in admin panel user.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// Everything persisted under the store namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedStore {
    #[serde(default)]
    pub cart: Cart,
}

/// Session-stored identity of a user signed in to the admin panel.
///
/// `is_admin` is resolved once at sign-in. Implements `Debug` manually to
/// redact the access token.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub user_id: UserId,
    pub email: String,
    /// Bearer token sent with catalogue mutations and uploads.
    pub access_token: String,
    /// Unix timestamp after which the token is rejected by the backend.
    pub expires_at: i64,
    pub is_admin: bool,
}

impl std::fmt::Debug for CurrentAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentAdmin")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

impl CurrentAdmin {
    #[must_use]
    pub fn new(session: AuthSession, is_admin: bool) -> Self {
        use secrecy::ExposeSecret;

        Self {
            access_token: session.access_token.expose_secret().to_owned(),
            user_id: session.user_id,
            email: session.email,
            expires_at: session.expires_at,
            is_admin,
        }
    }

    /// Whether the access token has expired at `now` (Unix seconds).
    #[must_use]
    pub const fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn admin() -> CurrentAdmin {
        CurrentAdmin::new(
            AuthSession {
                user_id: UserId::new("0b7d"),
                email: "admin@witherstex.com".to_string(),
                access_token: SecretString::from("jwt-secret-token"),
                expires_at: 1_000,
            },
            true,
        )
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug_output = format!("{:?}", admin());
        assert!(debug_output.contains("admin@witherstex.com"));
        assert!(!debug_output.contains("jwt-secret-token"));
    }

    #[test]
    fn test_expiry() {
        let admin = admin();
        assert!(!admin.is_expired(999));
        assert!(admin.is_expired(1_000));
    }

    #[test]
    fn test_store_record_without_cart_defaults() {
        let store: PersistedStore = serde_json::from_str("{}").unwrap_or_default();
        assert!(store.cart.is_empty());
    }
}
