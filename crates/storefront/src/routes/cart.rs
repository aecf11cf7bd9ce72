//! Cart route handlers.
//!
//! The cart lives in the visitor's session; every form posts, mutates the
//! stored cart and redirects. `/cart/count` renders the badge fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use witherstex_core::{MIN_ORDER_PACKAGES, ProductId};

use super::local_path;
use crate::error::{AppError, add_breadcrumb};
use crate::models::Toast;
use crate::services::{SessionCart, toast};
use crate::state::AppState;

/// Where the cart is reviewed.
const CART_PAGE: &str = "/checkout";

/// Form data for adding to cart.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Page to return to; only local paths are honored.
    pub redirect: Option<String>,
}

const fn default_quantity() -> u32 {
    MIN_ORDER_PACKAGES
}

/// Form data for updating a cart line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Form data for removing a cart line.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Add packages of a product to the cart.
///
/// The product is looked up in the catalogue so the cart stores the current
/// record, never client-supplied details. A product that cannot be loaded
/// leaves the cart unchanged and queues an error notification.
#[instrument(skip(state, cart, session))]
pub async fn add(
    State(state): State<AppState>,
    cart: SessionCart,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let target = form
        .redirect
        .as_deref()
        .and_then(local_path)
        .unwrap_or(CART_PAGE)
        .to_owned();

    let id = ProductId::new(form.product_id);
    let product = match state.catalogue().find_product(&id).await {
        Ok(Some(product)) => product,
        Ok(None) => {
            tracing::warn!(id = %id, "Add to cart for unknown product");
            toast::queue(&session, Toast::error("product.notFound")).await?;
            return Ok(Redirect::to(&target).into_response());
        }
        Err(e) => {
            tracing::error!(id = %id, error = %e, "Failed to fetch product for cart");
            toast::queue(&session, Toast::error("toast.error")).await?;
            return Ok(Redirect::to(&target).into_response());
        }
    };

    let quantity = form.quantity.to_string();
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product", product.slug.as_str()), ("quantity", &quantity)]),
    );

    cart.add(product, form.quantity).await?;
    toast::queue(&session, Toast::success("cart.added")).await?;

    Ok(Redirect::to(&target).into_response())
}

/// Set a line's quantity; zero or less removes it.
#[instrument(skip(cart))]
pub async fn update(
    cart: SessionCart,
    Form(form): Form<UpdateCartForm>,
) -> Result<Redirect, AppError> {
    cart.set_quantity(&ProductId::new(form.product_id), form.quantity)
        .await?;
    Ok(Redirect::to(CART_PAGE))
}

/// Remove a line from the cart.
#[instrument(skip(cart))]
pub async fn remove(
    cart: SessionCart,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect, AppError> {
    cart.remove(&ProductId::new(form.product_id)).await?;
    Ok(Redirect::to(CART_PAGE))
}

/// Get cart count badge.
#[instrument(skip(cart))]
pub async fn count(cart: SessionCart) -> impl IntoResponse {
    let count = cart
        .count()
        .await
        .inspect_err(|e| tracing::warn!("Failed to read cart count: {e}"))
        .unwrap_or(0);
    CartCountTemplate { count }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::extract::FromRequest;
    use axum::{Router, http::StatusCode, routing::post};
    use serde::de::DeserializeOwned;

    use super::*;
    use crate::test_support::{TestApp, location};

    async fn form<T: DeserializeOwned>(body: &str) -> T {
        let request = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap();
        let Form(form) = Form::<T>::from_request(request, &()).await.unwrap();
        form
    }

    #[tokio::test]
    async fn test_add_form_defaults_to_minimum_order() {
        let add: AddToCartForm = form("product_id=abc").await;
        assert_eq!(add.quantity, MIN_ORDER_PACKAGES);
        assert!(add.redirect.is_none());

        let add: AddToCartForm =
            form("product_id=abc&quantity=3&redirect=%2Fproducts%2Fprogrip").await;
        assert_eq!(add.quantity, 3);
        assert_eq!(add.redirect.as_deref(), Some("/products/progrip"));
    }

    #[tokio::test]
    async fn test_update_form_accepts_negative_quantities() {
        let update: UpdateCartForm = form("product_id=abc&quantity=-2").await;
        assert_eq!(update.quantity, -2);
    }

    #[tokio::test]
    async fn test_add_with_unreachable_catalogue_leaves_cart_unchanged() {
        let mut app = TestApp::new(Router::new().route("/cart/add", post(add)));
        let response = app
            .post_form("/cart/add", "product_id=1&redirect=%2Fproducts%2Fprogrip")
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/products/progrip");
        assert_eq!(app.take_toast().await, "toast.error");
        assert_eq!(app.cart_count().await, 0);
    }

    #[tokio::test]
    async fn test_add_failure_without_redirect_returns_to_cart() {
        let mut app = TestApp::new(Router::new().route("/cart/add", post(add)));
        let response = app.post_form("/cart/add", "product_id=1").await;

        assert_eq!(location(&response), CART_PAGE);
        assert_eq!(app.take_toast().await, "toast.error");
    }
}
