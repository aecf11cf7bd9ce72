//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string for the session store
//! - `STOREFRONT_BASE_URL` - Public URL for the site
//! - `STOREFRONT_SESSION_SECRET` - Session cookie signing secret (min 64 chars, high entropy)
//! - `SUPABASE_URL` - Project URL of the hosted backend
//! - `SUPABASE_ANON_KEY` - Public API key of the hosted backend
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `SUPABASE_STORAGE_BUCKET` - Bucket for product images (default: product-images)
//! - `WHATSAPP_ORDER_NUMBER` - Number that receives checkout orders (default: 212720736224)
//! - `WHATSAPP_CONTACT_NUMBER` - Number that receives product inquiries (default: 212663400034)
//! - `ORDER_MESSAGE_LANGUAGE` - Language of order messages (default: fr)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (default: production)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tower_sessions::cookie::Key;
use url::Url;
use witherstex_core::Language;

/// Cookie signing keys are 64 bytes.
const MIN_SESSION_SECRET_LENGTH: usize = 64;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

const DEFAULT_STORAGE_BUCKET: &str = "product-images";
const DEFAULT_ORDER_NUMBER: &str = "212720736224";
const DEFAULT_CONTACT_NUMBER: &str = "212663400034";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Signs the session cookie
    pub session_secret: SecretString,
    /// Hosted backend (catalogue table, storage, auth)
    pub supabase: SupabaseConfig,
    /// WhatsApp hand-off numbers
    pub whatsapp: WhatsAppConfig,
    /// Language order messages are written in, whatever the visitor reads
    pub order_language: Language,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: String,
}

/// Hosted backend configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g. `https://abcd.supabase.co`)
    pub url: Url,
    /// Public API key, sent as `apikey` on every request
    pub anon_key: SecretString,
    /// Storage bucket holding product images
    pub storage_bucket: String,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"[REDACTED]")
            .field("storage_bucket", &self.storage_bucket)
            .finish()
    }
}

/// Numbers the site hands visitors over to.
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    /// Receives checkout orders
    pub order_number: String,
    /// Receives "tell me more" product inquiries
    pub contact_number: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            order_number: DEFAULT_ORDER_NUMBER.to_owned(),
            contact_number: DEFAULT_CONTACT_NUMBER.to_owned(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = session_database_url()?;
        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_required_env("STOREFRONT_BASE_URL")?;
        let session_secret = get_validated_secret("STOREFRONT_SESSION_SECRET")?;
        validate_session_secret(&session_secret, "STOREFRONT_SESSION_SECRET")?;

        let supabase = SupabaseConfig::from_env()?;
        let whatsapp = WhatsAppConfig::from_env();
        let order_language = get_env_or_default("ORDER_MESSAGE_LANGUAGE", "fr")
            .parse::<Language>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ORDER_MESSAGE_LANGUAGE".to_string(), e.to_string())
            })?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_env_or_default("SENTRY_ENVIRONMENT", "production");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            session_secret,
            supabase,
            whatsapp,
            order_language,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Key signing the session cookie, taken from the first 64 bytes of
    /// the session secret.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InsecureSecret` if the secret is too short.
    pub fn session_key(&self) -> Result<Key, ConfigError> {
        let secret = self.session_secret.expose_secret().as_bytes();
        let bytes = secret.get(..MIN_SESSION_SECRET_LENGTH).unwrap_or(secret);
        Key::try_from(bytes).map_err(|e| {
            ConfigError::InsecureSecret("STOREFRONT_SESSION_SECRET".to_string(), e.to_string())
        })
    }

    /// Whether cookies must carry the `Secure` flag.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl SupabaseConfig {
    /// Load the backend settings on their own (also used by `wx-cli seed`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SUPABASE_URL` or `SUPABASE_ANON_KEY` is
    /// missing or the URL is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = get_required_env("SUPABASE_URL")?;
        let url = parse_base_url(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("SUPABASE_URL".to_string(), e))?;

        // The anon key is public by design, so only presence is checked.
        let anon_key = SecretString::from(get_required_env("SUPABASE_ANON_KEY")?);

        Ok(Self {
            url,
            anon_key,
            storage_bucket: get_env_or_default("SUPABASE_STORAGE_BUCKET", DEFAULT_STORAGE_BUCKET),
        })
    }

    /// Public API key.
    #[must_use]
    pub fn anon_key(&self) -> &str {
        self.anon_key.expose_secret()
    }
}

impl WhatsAppConfig {
    fn from_env() -> Self {
        Self {
            order_number: get_env_or_default("WHATSAPP_ORDER_NUMBER", DEFAULT_ORDER_NUMBER),
            contact_number: get_env_or_default("WHATSAPP_CONTACT_NUMBER", DEFAULT_CONTACT_NUMBER),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a project URL, making sure it ends in `/` so `Url::join` appends.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme {}", url.scheme()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
/// Session database URL: `STOREFRONT_DATABASE_URL`, else `DATABASE_URL`.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` when neither is set.
pub fn session_database_url() -> Result<SecretString, ConfigError> {
    get_database_url("STOREFRONT_DATABASE_URL")
}

fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{pattern}')"),
        ));
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}
