//! Static content page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::content::{ABOUT_PRODUCT_LINES, ABOUT_STATS, ABOUT_VALUES, Feature};
use crate::filters;
use crate::middleware::PageContext;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: PageContext,
    pub values: [Feature; 4],
    pub stats: [(&'static str, &'static str); 4],
    pub product_lines: [&'static str; 5],
}

/// Not found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub page: PageContext,
}

/// Display the about page.
#[instrument(skip(page))]
pub async fn about(page: PageContext) -> impl IntoResponse {
    AboutTemplate {
        page,
        values: ABOUT_VALUES,
        stats: ABOUT_STATS,
        product_lines: ABOUT_PRODUCT_LINES,
    }
}

/// Fallback for unknown paths.
#[instrument(skip(page), fields(path = %page.path))]
pub async fn not_found(page: PageContext) -> impl IntoResponse {
    tracing::warn!("Unknown route requested");
    (StatusCode::NOT_FOUND, NotFoundTemplate { page })
}
