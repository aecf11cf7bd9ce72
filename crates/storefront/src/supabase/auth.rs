//! Admin authentication against the hosted auth service.
//!
//! Accounts are plain email/password users. Being signed in is not enough to
//! manage the catalogue: the user also needs an `admin` row in the
//! `user_roles` table.

use std::sync::Arc;

use reqwest::Method;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use witherstex_core::UserId;

use super::{Backend, SupabaseError};
use crate::config::SupabaseConfig;

const ADMIN_ROLE: &str = "admin";

/// Errors from sign-up and sign-in.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email already registered")]
    AlreadyRegistered,

    #[error("invalid login credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Backend(#[from] SupabaseError),
}

impl AuthError {
    /// Notification shown on the login form.
    #[must_use]
    pub const fn toast_key(&self) -> &'static str {
        match self {
            Self::AlreadyRegistered => "toast.emailUsed",
            Self::InvalidCredentials => "toast.invalidCredentials",
            Self::Backend(_) => "toast.error",
        }
    }

    /// Classify a backend failure by the message the auth service sent.
    fn classify(err: SupabaseError) -> Self {
        if let SupabaseError::Api { message, .. } = &err {
            let message = message.to_ascii_lowercase();
            if message.contains("already registered") || message.contains("already exists") {
                return Self::AlreadyRegistered;
            }
            if message.contains("invalid login credentials") {
                return Self::InvalidCredentials;
            }
        }
        Self::Backend(err)
    }
}

/// A signed-in user.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: UserId,
    pub email: String,
    pub access_token: SecretString,
    /// Unix timestamp after which `access_token` is rejected.
    pub expires_at: i64,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    id: String,
    #[serde(default)]
    email: Option<String>,
    /// Empty when the email belongs to an existing account and confirmation
    /// is enabled; the service hides the conflict behind a fake user.
    #[serde(default)]
    identities: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    access_token: String,
    expires_in: i64,
    #[serde(default)]
    expires_at: Option<i64>,
    user: UserBody,
}

/// Sign-up answers with a session when confirmation is disabled, or with
/// the bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    Session(TokenBody),
    User(UserBody),
}

impl SignUpBody {
    fn user(&self) -> &UserBody {
        match self {
            Self::Session(token) => &token.user,
            Self::User(user) => user,
        }
    }
}

impl TokenBody {
    fn into_session(self, fallback_email: &str) -> AuthSession {
        let expires_at = self
            .expires_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp() + self.expires_in);
        AuthSession {
            user_id: UserId::new(self.user.id),
            email: self
                .user
                .email
                .unwrap_or_else(|| fallback_email.to_owned()),
            access_token: SecretString::from(self.access_token),
            expires_at,
        }
    }
}

/// Client for the auth service and the `user_roles` table.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<Backend>,
}

impl AuthClient {
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            inner: Arc::new(Backend::new(config)),
        }
    }

    /// Register an account. The service may require email confirmation
    /// before the first sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AlreadyRegistered`] for a known email.
    #[instrument(skip(self, password))]
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let url = self.inner.endpoint("auth/v1/signup")?;
        let request = self
            .inner
            .request(Method::POST, url, None)
            .json(&Credentials { email, password });

        let body: SignUpBody = self
            .inner
            .send_json(request)
            .await
            .map_err(AuthError::classify)?;

        if body.user().identities.as_ref().is_some_and(Vec::is_empty) {
            return Err(AuthError::AlreadyRegistered);
        }

        tracing::info!(user_id = %body.user().id, "Account created");
        Ok(())
    }

    /// Exchange email and password for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on a wrong email/password.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let mut url = self.inner.endpoint("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let request = self
            .inner
            .request(Method::POST, url, None)
            .json(&Credentials { email, password });

        let body: TokenBody = self
            .inner
            .send_json(request)
            .await
            .map_err(AuthError::classify)?;

        Ok(body.into_session(email))
    }

    /// Revoke `access_token`. Failures are logged, not returned: the local
    /// session is dropped either way.
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) {
        let result = async {
            let url = self.inner.endpoint("auth/v1/logout")?;
            let request = self.inner.request(Method::POST, url, Some(access_token));
            self.inner.send(request).await
        }
        .await;

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to revoke access token");
        }
    }

    /// Whether `user_id` holds the admin role.
    ///
    /// The query runs with the user's own token, so it only sees rows the
    /// user is allowed to read.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, access_token), fields(user_id = %user_id))]
    pub async fn is_admin(
        &self,
        user_id: &UserId,
        access_token: &str,
    ) -> Result<bool, SupabaseError> {
        let mut url = self.inner.endpoint("rest/v1/user_roles")?;
        url.query_pairs_mut()
            .append_pair("select", "role")
            .append_pair("user_id", &format!("eq.{user_id}"))
            .append_pair("role", &format!("eq.{ADMIN_ROLE}"))
            .append_pair("limit", "1");

        let request = self.inner.request(Method::GET, url, Some(access_token));
        let rows: Vec<serde_json::Value> = self.inner.send_json(request).await?;
        Ok(!rows.is_empty())
    }
}
