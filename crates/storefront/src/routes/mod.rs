//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page
//! GET  /catalogue               - Product catalogue (?category=)
//! GET  /products/{slug}         - Product detail
//! GET  /a-propos                - About page
//! GET  /contact                 - Contact page
//! POST /contact                 - Contact form
//!
//! # Cart (persisted in the session)
//! POST /cart/add                - Add packages of a product
//! POST /cart/update             - Set a line's quantity
//! POST /cart/remove             - Remove a line
//! GET  /cart/count              - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout                - Cart summary and customer form
//! POST /checkout                - Validate, then hand the order to WhatsApp
//!
//! # Language
//! POST /language/cycle          - Next language, back to the referring page
//! POST /language/{code}         - Pick a language
//!
//! # Admin
//! GET  /admin                   - Login form, access denied, or dashboard
//! POST /admin/login             - Sign in
//! POST /admin/signup            - Create an account
//! POST /admin/logout            - Sign out
//! GET  /admin/products/new      - New product form
//! POST /admin/products          - Create product
//! GET  /admin/products/{id}/edit - Edit product form
//! POST /admin/products/{id}     - Update product
//! POST /admin/products/{id}/delete - Delete product
//!
//! Anything else renders the not-found page.
//! ```

pub mod admin;
pub mod cart;
pub mod catalogue;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod language;
pub mod pages;
pub mod products;

use axum::{
    Router,
    handler::Handler,
    http::{HeaderMap, header::REFERER},
    routing::{get, post},
};

use crate::middleware::{RateLimiterLayer, form_rate_limiter};
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes(limiter: &RateLimiterLayer) -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add).layer(limiter.clone()))
        .route("/update", post(cart::update).layer(limiter.clone()))
        .route("/remove", post(cart::remove).layer(limiter.clone()))
        .route("/count", get(cart::count))
}

/// Create the language routes router.
pub fn language_routes() -> Router<AppState> {
    Router::new()
        .route("/cycle", post(language::cycle))
        .route("/{code}", post(language::select))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    let forms = form_rate_limiter();

    Router::new()
        .route("/", get(home::home))
        .route("/catalogue", get(catalogue::index))
        .route("/products/{slug}", get(products::show))
        .route("/a-propos", get(pages::about))
        .route(
            "/contact",
            get(contact::show).post(contact::submit.layer(forms.clone())),
        )
        .nest("/cart", cart_routes(&forms))
        .route(
            "/checkout",
            get(checkout::show).post(checkout::submit.layer(forms)),
        )
        .nest("/language", language_routes())
        .nest("/admin", admin::routes())
        .fallback(pages::not_found)
}

/// Accept `target` as a redirect only when it is a path on this site.
pub(crate) fn local_path(target: &str) -> Option<&str> {
    let is_local = target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(char::is_control);
    is_local.then_some(target)
}

/// Path and query of the referring page, if it was a page of this site's
/// shape. The host is ignored, so the redirect always stays local.
pub(crate) fn referer_path(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(REFERER)?.to_str().ok()?;
    let url = url::Url::parse(referer).ok()?;
    let mut path = url.path().to_string();
    if let Some(query) = url.query() {
        path.push('?');
        path.push_str(query);
    }
    local_path(&path).map(str::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_local_path() {
        assert_eq!(local_path("/products/progrip"), Some("/products/progrip"));
        assert_eq!(local_path("/checkout?x=1"), Some("/checkout?x=1"));
        assert_eq!(local_path("//evil.example"), None);
        assert_eq!(local_path("https://evil.example"), None);
        assert_eq!(local_path("/\\evil.example"), None);
        assert_eq!(local_path(""), None);
    }

    #[test]
    fn test_referer_path_keeps_query_and_drops_host() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REFERER,
            HeaderValue::from_static("https://witherstex.com/catalogue?category=thermal"),
        );
        assert_eq!(
            referer_path(&headers).as_deref(),
            Some("/catalogue?category=thermal")
        );
    }

    #[test]
    fn test_referer_path_missing_or_invalid() {
        assert!(referer_path(&HeaderMap::new()).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("not a url"));
        assert!(referer_path(&headers).is_none());
    }
}
