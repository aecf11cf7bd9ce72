//! Connection pool for the session database.
//!
//! The catalogue lives in the hosted backend; `PostgreSQL` only backs the
//! `tower_sessions` table that stores carts, language choices and admin
//! logins. Its migration is applied with:
//!
//! ```bash
//! cargo run -p witherstex-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
