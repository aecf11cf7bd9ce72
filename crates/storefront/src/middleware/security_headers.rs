//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Adds restrictive security headers to all responses.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use super::csp::CspNonce;

/// Build the `Content-Security-Policy` value for a request.
///
/// ```text
/// default-src 'none';
/// script-src 'self' 'nonce-…';
/// style-src 'self';
/// font-src 'self';
/// img-src 'self' https: data:;
/// connect-src 'self';
/// frame-src 'none';
/// object-src 'none';
/// base-uri 'self';
/// form-action 'self';
/// frame-ancestors 'none';
/// upgrade-insecure-requests
/// ```
///
/// Product images may be served from the storage bucket's domain, hence
/// `https:` for images. WhatsApp is only reached through links opened in a
/// new tab, so forms stay on this site.
#[must_use]
pub fn content_security_policy(nonce: Option<&str>) -> String {
    let script_src = match nonce {
        Some(nonce) if !nonce.is_empty() => format!("'self' 'nonce-{nonce}'"),
        _ => "'self'".to_string(),
    };

    format!(
        "default-src 'none'; \
         script-src {script_src}; \
         style-src 'self'; \
         font-src 'self'; \
         img-src 'self' https: data:; \
         connect-src 'self'; \
         frame-src 'none'; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'; \
         upgrade-insecure-requests"
    )
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: same-origin` (the language switcher redirects back
///   using the referer)
/// - `Content-Security-Policy` (see [`content_security_policy`])
/// - `Permissions-Policy` denying sensitive features
/// - `Cache-Control: no-store, max-age=0` on pages
/// - `Cross-Origin-Opener-Policy: same-origin`
/// - `Cross-Origin-Resource-Policy: same-origin`
/// - `Cross-Origin-Embedder-Policy: credentialless`
/// - `X-DNS-Prefetch-Control: off`
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let nonce = request.extensions().get::<CspNonce>().cloned();
    let is_static = request.uri().path().starts_with("/static/");

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("same-origin"));

    let csp = content_security_policy(nonce.as_ref().map(CspNonce::value));
    if let Ok(value) = HeaderValue::from_str(&csp) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "accelerometer=(), \
             autoplay=(), \
             browsing-topics=(), \
             camera=(), \
             display-capture=(), \
             encrypted-media=(), \
             fullscreen=(), \
             geolocation=(), \
             gyroscope=(), \
             hid=(), \
             idle-detection=(), \
             interest-cohort=(), \
             magnetometer=(), \
             microphone=(), \
             midi=(), \
             payment=(), \
             publickey-credentials-get=(), \
             screen-wake-lock=(), \
             serial=(), \
             sync-xhr=(), \
             usb=(), \
             xr-spatial-tracking=()",
        ),
    );

    // Pages carry the cart and admin state; stylesheets and images may be cached.
    let cache_control = if is_static {
        "public, max-age=3600"
    } else {
        "no-store, max-age=0"
    };
    headers.insert(
        HeaderName::from_static("cache-control"),
        HeaderValue::from_static(cache_control),
    );

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("same-origin"),
    );
    // Product images come from the storage domain, which sets no CORP header.
    headers.insert(
        HeaderName::from_static("cross-origin-embedder-policy"),
        HeaderValue::from_static("credentialless"),
    );
    headers.insert(
        HeaderName::from_static("x-dns-prefetch-control"),
        HeaderValue::from_static("off"),
    );

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http::Request as HttpRequest, middleware, routing::get};
    use tower::ServiceExt;

    use super::*;
    use crate::middleware::csp::csp_nonce_middleware;

    #[test]
    fn test_policy_includes_nonce() {
        let csp = content_security_policy(Some("abc123=="));
        assert!(csp.contains("script-src 'self' 'nonce-abc123=='"));
        assert!(csp.contains("form-action 'self';"));
    }

    #[test]
    fn test_policy_without_nonce() {
        assert!(content_security_policy(None).contains("script-src 'self';"));
        assert!(content_security_policy(Some("")).contains("script-src 'self';"));
    }

    #[tokio::test]
    async fn test_headers_applied_with_request_nonce() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(security_headers_middleware))
            .layer(middleware::from_fn(csp_nonce_middleware));

        let response = app
            .oneshot(HttpRequest::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers.get(X_FRAME_OPTIONS).unwrap(), "DENY");
        assert_eq!(headers.get("cache-control").unwrap(), "no-store, max-age=0");
        let csp = headers
            .get(CONTENT_SECURITY_POLICY)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(csp.contains("'nonce-"));
    }
}
