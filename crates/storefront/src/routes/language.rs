//! Language switching.
//!
//! Both handlers persist the choice in the session and send the visitor back
//! to the page they came from.

use axum::{extract::Path, http::HeaderMap, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;
use witherstex_core::Language;

use super::referer_path;
use crate::error::AppError;
use crate::services::language;

fn back(headers: &HeaderMap) -> Redirect {
    Redirect::to(referer_path(headers).as_deref().unwrap_or("/"))
}

/// Switch to the next language (FR, EN, 中文, then FR again).
#[instrument(skip(session, headers))]
pub async fn cycle(session: Session, headers: HeaderMap) -> Result<Redirect, AppError> {
    let next = language::cycle(&session).await?;
    tracing::debug!(language = next.code(), "Language cycled");
    Ok(back(&headers))
}

/// Switch to the language with `code`.
#[instrument(skip(session, headers))]
pub async fn select(
    session: Session,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    let chosen = code
        .parse::<Language>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    language::set(&session, chosen).await?;
    Ok(back(&headers))
}
