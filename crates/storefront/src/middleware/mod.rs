//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. CSP nonce (generate per-request nonce for inline scripts)
//! 5. Security headers (CSP with the nonce, frame and isolation policies)
//! 6. Session layer (tower-sessions with `PostgreSQL` store)
//! 7. Rate limiting on form endpoints (governor)
//!
//! Extractors built on the session: [`PageContext`] for rendered pages,
//! [`RequireAdmin`]/[`OptionalAdmin`] for the admin panel.

pub mod admin;
pub mod csp;
pub mod page;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use admin::{OptionalAdmin, RequireAdmin, clear_current_admin, set_current_admin};
pub use csp::{CspNonce, csp_nonce_middleware};
pub use page::PageContext;
pub use rate_limit::{RateLimiterLayer, auth_rate_limiter, form_rate_limiter};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
