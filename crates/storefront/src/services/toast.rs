//! Queue and consume one-shot notifications.

use tower_sessions::Session;

use crate::models::{Toast, session_keys};

/// Queue `toast` for the next rendered page, replacing any pending one.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn queue(session: &Session, toast: Toast) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::TOAST, toast).await
}

/// Take the pending toast, if any. A toast is shown at most once.
pub async fn take(session: &Session) -> Option<Toast> {
    session
        .remove::<Toast>(session_keys::TOAST)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to read queued toast"))
        .ok()
        .flatten()
}
