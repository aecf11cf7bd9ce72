//! Admin panel authentication extractors.
//!
//! `/admin` itself is a gate that renders the login form, an access-denied
//! notice or the dashboard depending on [`OptionalAdmin`]. Every other admin
//! route requires [`RequireAdmin`] and sends anyone else back to the gate.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// Where rejected admin requests are sent.
pub const ADMIN_GATE_PATH: &str = "/admin";

/// Load the signed-in user, dropping a session whose token has expired.
async fn load_current_admin(session: &Session) -> Option<CurrentAdmin> {
    let admin = session
        .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()?;

    if admin.is_expired(chrono::Utc::now().timestamp()) {
        tracing::info!(user_id = %admin.user_id, "Admin session expired");
        let _ = clear_current_admin(session).await;
        return None;
    }

    Some(admin)
}

/// Extractor that requires a signed-in user holding the admin role.
///
/// ```rust,ignore
/// async fn handler(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
///     format!("Signed in as {}", admin.email)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

/// Rejection for [`RequireAdmin`].
pub enum AdminRejection {
    /// Back to the gate, which shows the login form or the denial.
    RedirectToGate,
    /// No session layer on the route.
    Unavailable,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToGate => Redirect::to(ADMIN_GATE_PATH).into_response(),
            Self::Unavailable => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminRejection::Unavailable)?;

        load_current_admin(session)
            .await
            .filter(|admin| admin.is_admin)
            .map(Self)
            .ok_or(AdminRejection::RedirectToGate)
    }
}

/// Extractor for the signed-in user, admin or not.
pub struct OptionalAdmin(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for OptionalAdmin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = match parts.extensions.get::<Session>() {
            Some(session) => load_current_admin(session).await,
            None => None,
        };
        Ok(Self(admin))
    }
}

/// Store the signed-in user in the session.
///
/// The session ID is cycled first so a pre-login ID cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Remove the signed-in user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
