//! Integration tests for the Witherstex storefront.
//!
//! The tests talk HTTP to a running server and are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Session table, then a catalogue to browse
//! cargo run -p witherstex-cli -- migrate
//! cargo run -p witherstex-cli -- seed
//!
//! # Start the storefront
//! cargo run -p witherstex-storefront
//!
//! # Run the ignored tests against it
//! STOREFRONT_BASE_URL=http://localhost:3000 \
//!     cargo test -p witherstex-integration-tests -- --ignored
//! ```
//!
//! # Test Files
//!
//! - `storefront_pages` - public pages, 404s, language switching, headers
//! - `storefront_cart` - cart, checkout validation and the WhatsApp hand-off
//! - `storefront_admin` - login gate and protected product routes

use reqwest::{Client, redirect::Policy};

/// Base URL of the storefront under test (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A visitor: keeps its session cookie and does not follow redirects, so
/// tests can assert on `Location`.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn visitor() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Absolute URL for `path` on the storefront.
#[must_use]
pub fn url(path: &str) -> String {
    format!("{}{path}", storefront_base_url().trim_end_matches('/'))
}

/// Value of the first `name="{name}" value="..."` attribute pair in `html`.
#[must_use]
pub fn input_value(html: &str, name: &str) -> Option<String> {
    let marker = format!("name=\"{name}\" value=\"");
    let start = html.find(&marker)? + marker.len();
    let rest = html.get(start..)?;
    let end = rest.find('"')?;
    rest.get(..end).map(str::to_owned)
}

/// First `/products/{slug}` link in `html`.
#[must_use]
pub fn first_product_path(html: &str) -> Option<String> {
    let marker = "href=\"/products/";
    let start = html.find(marker)? + "href=\"".len();
    let rest = html.get(start..)?;
    let end = rest.find('"')?;
    rest.get(..end).map(str::to_owned)
}

/// WhatsApp link on the checkout hand-off page.
#[must_use]
pub fn whatsapp_link(html: &str) -> Option<String> {
    let marker = "href=\"https://wa.me/";
    let start = html.find(marker)? + "href=\"".len();
    let rest = html.get(start..)?;
    let end = rest.find('"')?;
    rest.get(..end).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value() {
        let html = r#"<input type="hidden" name="product_id" value="42"><input name="redirect" value="/x">"#;
        assert_eq!(input_value(html, "product_id").as_deref(), Some("42"));
        assert_eq!(input_value(html, "redirect").as_deref(), Some("/x"));
        assert_eq!(input_value(html, "quantity"), None);
    }

    #[test]
    fn test_first_product_path() {
        let html = r#"<a href="/catalogue">All</a><a href="/products/impactmax" class="x">"#;
        assert_eq!(first_product_path(html).as_deref(), Some("/products/impactmax"));
        assert_eq!(first_product_path("<p>none</p>"), None);
    }

    #[test]
    fn test_whatsapp_link() {
        let html = r#"<a href="/">Home</a><a href="https://wa.me/212720736224?text=Bonjour%20" target="_blank">"#;
        assert_eq!(
            whatsapp_link(html).as_deref(),
            Some("https://wa.me/212720736224?text=Bonjour%20")
        );
        assert_eq!(whatsapp_link(r#"<a href="/contact">"#), None);
    }
}
