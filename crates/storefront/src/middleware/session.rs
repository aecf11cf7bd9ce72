//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions. The session
//! carries the visitor's cart, language, pending toast and admin sign-in.
//! The session id cookie is signed with the configured session secret.

use sqlx::PgPool;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::{ConfigError, StorefrontConfig};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "wx_session";

/// Session expiry after inactivity, in seconds (30 days).
const SESSION_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Create the session layer with `PostgreSQL` store.
///
/// The `tower_sessions.session` table must exist; `wx-cli migrate` creates it.
///
/// # Errors
///
/// Returns `ConfigError` if no signing key can be derived from the session
/// secret.
pub fn create_session_layer(
    pool: &PgPool,
    config: &StorefrontConfig,
) -> Result<SessionManagerLayer<PostgresStore, SignedCookie>, ConfigError> {
    let store = PostgresStore::new(pool.clone());

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_https())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(config.session_key()?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::config::tests::test_config;

    #[tokio::test]
    async fn test_session_layer_needs_signing_key() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/witherstex_test")
            .unwrap();
        let mut config = test_config();
        assert!(create_session_layer(&pool, &config).is_ok());

        config.session_secret = SecretString::from("too-short");
        assert!(create_session_layer(&pool, &config).is_err());
    }
}
