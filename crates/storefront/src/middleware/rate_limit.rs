//! Rate limiting middleware using governor and `tower_governor`.
//!
//! - `auth_rate_limiter`: strict limits for admin sign-in and sign-up (~10/min)
//! - `form_rate_limiter`: relaxed limits for cart, checkout and contact posts (~60/min)

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

// =============================================================================
// Client IP Key Extractor
// =============================================================================

/// Header set by Cloudflare with the real client address.
const CLOUDFLARE_IP_HEADER: &str = "cf-connecting-ip";

/// Single-address proxy headers consulted after `X-Forwarded-For`.
const FALLBACK_IP_HEADERS: &[&str] = &["x-real-ip", "fly-client-ip"];

/// Key extractor that reads the client IP from proxy headers, falling back
/// to the socket peer address.
#[derive(Clone, Copy)]
pub struct ClientIpKeyExtractor;

impl tower_governor::key_extractor::KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let headers = req.headers();
        let header_ip = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<IpAddr>().ok())
        };

        if let Some(ip) = header_ip(CLOUDFLARE_IP_HEADER) {
            return Ok(ip);
        }

        // First address of X-Forwarded-For is the original client.
        if let Some(ip) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        if let Some(ip) = FALLBACK_IP_HEADERS.iter().find_map(|name| header_ip(name)) {
            return Ok(ip);
        }

        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

// =============================================================================
// Rate Limiter Configuration
// =============================================================================

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Rate limiter for admin sign-in and sign-up: ~10 requests per minute per IP.
///
/// One token every 6 seconds, burst of 5.
///
/// # Panics
///
/// Does not panic: `per_second(6)` and `burst_size(5)` are non-zero, which is
/// all `GovernorConfigBuilder::finish` checks.
#[must_use]
pub fn auth_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .per_second(6)
        .burst_size(5)
        .finish()
        .expect("rate limiter config with per_second(6) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}

/// Rate limiter for visitor form posts: ~60 requests per minute per IP.
///
/// One token per second, burst of 30.
///
/// # Panics
///
/// Does not panic: `per_second(1)` and `burst_size(30)` are non-zero.
#[must_use]
pub fn form_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .per_second(1)
        .burst_size(30)
        .finish()
        .expect("rate limiter config with per_second(1) and burst_size(30) is valid");
    GovernorLayer::new(Arc::new(config))
}
