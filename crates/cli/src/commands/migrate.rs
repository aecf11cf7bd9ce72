//! Session store migration.
//!
//! The storefront keeps carts, language choices, toasts and admin logins in
//! `tower_sessions.session`. The table is created here rather than on
//! server start-up.
//!
//! # Usage
//!
//! ```bash
//! wx-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use thiserror::Error;
use tower_sessions_sqlx_store::PostgresStore;
use witherstex_storefront::config::{ConfigError, session_database_url};
use witherstex_storefront::db;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create (or update) the session table.
///
/// # Errors
///
/// Returns an error if the database URL is missing or the migration fails.
pub async fn sessions() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();
    let database_url = session_database_url()?;

    tracing::info!("Connecting to session database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running session store migration...");
    PostgresStore::new(pool).migrate().await?;

    tracing::info!("Session store migration complete!");
    Ok(())
}
