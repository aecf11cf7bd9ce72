//! Per-request rendering context shared by every page template.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use witherstex_core::{Language, Translator};

use super::csp::CspNonce;
use crate::content::{COMPANY, Company, FOOTER_PRODUCT_LINES};
use crate::models::Toast;
use crate::services::{SessionCart, language, toast};

/// What the base layout needs: the visitor's language, the cart badge,
/// a pending toast and the CSP nonce.
///
/// Extracting it consumes the pending toast, so only handlers that render a
/// page should ask for it.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub translator: Translator,
    pub nonce: String,
    pub cart_count: u64,
    pub toast: Option<Toast>,
    pub path: String,
}

impl PageContext {
    /// Translate `key`.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator.t(key)
    }

    /// Translate a message with one `{name}` placeholder.
    #[must_use]
    pub fn fill(&self, key: &str, name: &str, value: impl std::fmt::Display) -> String {
        self.translator.fill(key, name, value)
    }

    /// Pick `singular_key` or `plural_key` for `count` and translate it.
    #[must_use]
    pub fn plural<'a>(&self, count: usize, singular_key: &'a str, plural_key: &'a str) -> &'a str {
        self.translator.plural(count, singular_key, plural_key)
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.translator.language()
    }

    /// `lang` attribute of the page.
    #[must_use]
    pub const fn lang_code(&self) -> &'static str {
        self.translator.language().code()
    }

    /// Label shown on the language switcher (the current language).
    #[must_use]
    pub const fn lang_label(&self) -> &'static str {
        self.translator.language().label()
    }

    /// Whether the navigation link to `href` is the current page.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            self.path == "/"
        } else {
            self.path == href || self.path.starts_with(&format!("{href}/"))
        }
    }

    /// Translated text of the pending toast.
    #[must_use]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|toast| self.translator.t(&toast.key))
    }

    /// Company details for the footer.
    #[must_use]
    pub const fn company(&self) -> &'static Company {
        &COMPANY
    }

    /// Product line keys listed in the footer.
    #[must_use]
    pub const fn footer_product_lines(&self) -> &'static [&'static str] {
        &FOOTER_PRODUCT_LINES
    }

    /// CSS modifier of the pending toast, empty when there is none.
    #[must_use]
    pub fn toast_class(&self) -> &'static str {
        self.toast.as_ref().map_or("", Toast::css_class)
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            translator: Translator::default(),
            nonce: String::new(),
            cart_count: 0,
            toast: None,
            path: "/".to_string(),
        }
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CspNonce(nonce) = CspNonce::from_request_parts(parts, state).await?;
        let path = parts.uri.path().to_string();

        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            tracing::warn!("Session not found in request extensions - rendering defaults");
            return Ok(Self {
                nonce,
                path,
                ..Self::default()
            });
        };

        let language = language::current(&session).await;
        let cart_count = SessionCart::new(session.clone())
            .count()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to read cart for badge"))
            .unwrap_or(0);
        let toast = toast::take(&session).await;

        Ok(Self {
            translator: Translator::new(language),
            nonce,
            cart_count,
            toast,
            path,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn context(path: &str) -> PageContext {
        PageContext {
            path: path.to_string(),
            ..PageContext::default()
        }
    }

    #[test]
    fn test_is_active() {
        assert!(context("/").is_active("/"));
        assert!(!context("/catalogue").is_active("/"));
        assert!(context("/catalogue").is_active("/catalogue"));
        assert!(context("/products/progrip").is_active("/products"));
        assert!(!context("/productsx").is_active("/products"));
    }

    #[test]
    fn test_toast_message_is_translated() {
        let mut page = PageContext::default();
        page.toast = Some(Toast::success("toast.loginSuccess"));
        assert_eq!(page.toast_message(), Some("Connexion réussie"));
    }

    #[tokio::test]
    async fn test_extracts_language_and_consumes_toast() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        language::set(&session, Language::En).await.unwrap();
        toast::queue(&session, Toast::error("toast.error")).await.unwrap();

        let (mut parts, ()) = axum::http::Request::builder()
            .uri("/contact")
            .body(())
            .unwrap()
            .into_parts();
        parts.extensions.insert(session.clone());
        parts.extensions.insert(CspNonce("n0nce".to_string()));

        let page = PageContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(page.language(), Language::En);
        assert_eq!(page.nonce, "n0nce");
        assert_eq!(page.path, "/contact");
        assert_eq!(page.toast, Some(Toast::error("toast.error")));
        assert_eq!(page.cart_count, 0);

        assert!(toast::take(&session).await.is_none());
    }
}
