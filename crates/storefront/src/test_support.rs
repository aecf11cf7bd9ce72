//! Drive route handlers through a router backed by an in-memory session.
//!
//! The backend URL points at a closed local port, so every catalogue call
//! fails the way an unreachable backend does.

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
    routing::{get, post},
};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};
use url::Url;
use witherstex_core::{Category, Product, ProductId, Slug, TechnicalSpecs, UserId};

use crate::config::tests::test_config;
use crate::middleware::set_current_admin;
use crate::models::CurrentAdmin;
use crate::services::{SessionCart, toast};
use crate::state::AppState;

/// Packages added by [`TestApp::fill_cart`].
pub const FILLED_PACKAGES: u32 = 10;

/// State whose backend cannot be reached.
pub fn offline_state() -> AppState {
    let mut config = test_config();
    config.supabase.url = Url::parse("http://127.0.0.1:9/").unwrap();
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/witherstex_test")
        .unwrap();
    AppState::new(config, pool)
}

pub fn product(id: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: "ProGrip Nitrile".to_string(),
        slug: Slug::from_name("ProGrip Nitrile"),
        description: "Gant de manutention".to_string(),
        category: Category::Handling,
        images: Vec::new(),
        image_url: None,
        technical_specs: TechnicalSpecs {
            material: "Polyester".to_string(),
            coating: "Nitrile".to_string(),
            sizes: "8, 9, 10".to_string(),
            certification: "EN388".to_string(),
            resistance: "4131X".to_string(),
            thickness: None,
            length: None,
        },
        pcs_per_colis: 12,
        is_b2b: true,
        badge: None,
    }
}

async fn fill_cart(cart: SessionCart) -> StatusCode {
    cart.add(product("1"), FILLED_PACKAGES).await.unwrap();
    StatusCode::NO_CONTENT
}

async fn cart_count(cart: SessionCart) -> String {
    cart.count().await.unwrap().to_string()
}

async fn queued_toast(session: Session) -> String {
    toast::take(&session).await.map(|t| t.key).unwrap_or_default()
}

async fn sign_in_admin(session: Session) -> StatusCode {
    let admin = CurrentAdmin {
        user_id: UserId::new("0b7d"),
        email: "admin@witherstex.com".to_string(),
        access_token: "token".to_string(),
        expires_at: i64::MAX,
        is_admin: true,
    };
    set_current_admin(&session, &admin).await.unwrap();
    StatusCode::NO_CONTENT
}

/// One visitor: a router plus the session cookie it was last given.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    pub fn new(routes: Router<AppState>) -> Self {
        let router = routes
            .route("/_test/fill-cart", post(fill_cart))
            .route("/_test/cart-count", get(cart_count))
            .route("/_test/toast", get(queued_toast))
            .route("/_test/sign-in", post(sign_in_admin))
            .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
            .with_state(offline_state());

        Self {
            router,
            cookie: None,
        }
    }

    async fn send(&mut self, mut request: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }
        response
    }

    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Put [`FILLED_PACKAGES`] packages of one product in the cart.
    pub async fn fill_cart(&mut self) {
        let response = self.post_form("/_test/fill-cart", "").await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    pub async fn cart_count(&mut self) -> u64 {
        let response = self.get("/_test/cart-count").await;
        body_text(response).await.parse().unwrap()
    }

    /// Key of the pending toast, consuming it; empty when none is queued.
    pub async fn take_toast(&mut self) -> String {
        let response = self.get("/_test/toast").await;
        body_text(response).await
    }

    pub async fn sign_in_admin(&mut self) {
        let response = self.post_form("/_test/sign-in", "").await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}
