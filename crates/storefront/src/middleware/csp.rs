//! CSP nonce middleware for inline script protection.
//!
//! Generates a random nonce per request. Templates put it on their
//! `<script nonce="...">` tags and the security headers middleware puts it in
//! the `Content-Security-Policy` header.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;

/// A CSP nonce value for inline scripts (128-bit, base64-encoded).
#[derive(Clone, Debug)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// Generate a new random nonce.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        Self(STANDARD.encode(bytes))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Store a fresh [`CspNonce`] in the request extensions.
///
/// Must run before `security_headers_middleware` so the nonce is available
/// when the CSP header is built.
pub async fn csp_nonce_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(CspNonce::generate());
    next.run(request).await
}

impl<S> FromRequestParts<S> for CspNonce
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_else(|| {
            tracing::warn!(
                "CSP nonce not found in request extensions - middleware may be misconfigured"
            );
            Self(String::new())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonces_are_unique_and_encoded() {
        let a = CspNonce::generate();
        let b = CspNonce::generate();
        assert_ne!(a.value(), b.value());
        // 16 bytes -> 24 base64 characters with padding
        assert_eq!(a.value().len(), 24);
        assert!(STANDARD.decode(a.value()).is_ok());
    }
}
