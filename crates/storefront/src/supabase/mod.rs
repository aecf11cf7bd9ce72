//! Clients for the hosted backend.
//!
//! # Architecture
//!
//! - The `products` table is the source of truth for the catalogue. There is
//!   no local copy, only a short-lived `moka` cache in front of reads.
//! - Every request carries the project's public `apikey`. Reads use it as the
//!   bearer token too; admin mutations send the signed-in admin's access
//!   token so row-level security applies.
//!
//! # Clients
//!
//! - [`CatalogueClient`] - product list, lookup by slug, create/update/delete
//! - [`StorageClient`] - product image uploads to a public bucket
//! - [`AuthClient`] - admin sign-up, password sign-in, admin-role check

mod auth;
mod cache;
mod catalogue;
mod rows;
mod storage;

pub use auth::{AuthClient, AuthError, AuthSession};
pub use catalogue::CatalogueClient;
pub use storage::StorageClient;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::SupabaseConfig;

/// Errors that can occur when talking to the hosted backend.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A stored row could not be turned into a domain value.
    #[error("Data corruption: {0}")]
    DataCorruption(String),

    /// Endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl SupabaseError {
    /// HTTP status reported by the backend, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shapes returned by the REST, storage and auth services.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Build the error for a non-success response body.
fn api_error(status: StatusCode, body: &str) -> SupabaseError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| body.chars().take(200).collect());
    SupabaseError::Api {
        status: status.as_u16(),
        message,
    }
}

/// HTTP plumbing shared by the three clients.
#[derive(Clone)]
struct Backend {
    client: reqwest::Client,
    base_url: Url,
    anon_key: SecretString,
}

impl Backend {
    fn new(config: &SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Resolve `path` against the project URL.
    fn endpoint(&self, path: &str) -> Result<Url, SupabaseError> {
        Ok(self.base_url.join(path)?)
    }

    /// Start a request authenticated as `bearer`, or anonymously.
    fn request(&self, method: Method, url: Url, bearer: Option<&str>) -> RequestBuilder {
        let anon_key = self.anon_key.expose_secret();
        self.client
            .request(method, url)
            .header("apikey", anon_key)
            .bearer_auth(bearer.unwrap_or(anon_key))
    }

    /// Send and return the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<String, SupabaseError> {
        let response = request.send().await?;
        read_body(response).await
    }

    /// Send and decode a JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, SupabaseError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            SupabaseError::Parse(e)
        })
    }
}

async fn read_body(response: Response) -> Result<String, SupabaseError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::warn!(
            status = %status,
            body = %body.chars().take(500).collect::<String>(),
            "Backend returned non-success status"
        );
        return Err(api_error(status, &body));
    }

    Ok(body)
}
