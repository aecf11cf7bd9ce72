//! Checkout: cart review, customer details and the WhatsApp handoff.
//!
//! There is no payment step. A valid submission is turned into an order
//! message and the cart is emptied. The visitor lands on a hand-off page
//! that opens WhatsApp in a new tab with the message prefilled.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;
use witherstex_core::checkout::{compose_order_message, whatsapp_link};
use witherstex_core::{Cart, CustomerDetails, FieldErrors, Translator};

use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::Toast;
use crate::services::SessionCart;
use crate::state::AppState;

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub page: PageContext,
    pub cart: Cart,
    pub details: CustomerDetails,
    pub errors: FieldErrors,
}

impl CheckoutTemplate {
    fn has_error(&self, field: &str) -> bool {
        self.errors.contains(field)
    }

    /// Translated message for `field`, empty when it is valid.
    fn field_error(&self, field: &str) -> &'static str {
        self.errors.get(field).map_or("", |key| self.page.t(key))
    }
}

/// Shown once the order is ready, linking to the prefilled WhatsApp chat.
#[derive(Template, WebTemplate)]
#[template(path = "checkout_handoff.html")]
pub struct CheckoutHandoffTemplate {
    pub page: PageContext,
    pub whatsapp_url: String,
}

/// Display the cart and the customer form, or the empty-cart view.
#[instrument(skip(cart, page))]
pub async fn show(cart: SessionCart, page: PageContext) -> Result<impl IntoResponse, AppError> {
    Ok(CheckoutTemplate {
        page,
        cart: cart.cart().await?,
        details: CustomerDetails::default(),
        errors: FieldErrors::new(),
    })
}

/// Validate the customer details and hand the order to WhatsApp.
///
/// Invalid details re-render the form with inline errors and leave the cart
/// untouched. On success the cart is cleared before the hand-off page is
/// shown, whether or not the visitor completes the chat.
#[instrument(skip(state, cart, page, details))]
pub async fn submit(
    State(state): State<AppState>,
    cart: SessionCart,
    mut page: PageContext,
    Form(details): Form<CustomerDetails>,
) -> Result<Response, AppError> {
    let contents = cart.cart().await?;

    if contents.is_empty() {
        return Ok(Redirect::to("/checkout").into_response());
    }

    if let Err(errors) = details.validate() {
        tracing::debug!(fields = errors.len(), "Checkout form rejected");
        page.toast = Some(Toast::error("toast.fillRequired"));
        return Ok(CheckoutTemplate {
            page,
            cart: contents,
            details,
            errors,
        }
        .into_response());
    }

    let config = state.config();
    let message = compose_order_message(
        Translator::new(config.order_language),
        &details,
        contents.lines(),
    );
    let whatsapp_url = whatsapp_link(&config.whatsapp.order_number, &message);

    let packages = contents.count().to_string();
    add_breadcrumb("checkout", "Order handed to WhatsApp", Some(&[("packages", &packages)]));
    tracing::info!(
        lines = contents.lines().len(),
        packages = contents.count(),
        "Order handed off to WhatsApp"
    );

    cart.clear().await?;
    page.cart_count = 0;
    page.toast = Some(Toast::success("checkout.redirecting"));

    Ok(CheckoutHandoffTemplate { page, whatsapp_url }.into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, http::StatusCode, routing::get};
    use witherstex_core::Language;

    use super::*;
    use crate::test_support::{FILLED_PACKAGES, TestApp, body_text, location};

    const DETAILS: &str = "firstName=Jean&lastName=Dupont&email=jean%40example.com\
        &phone=0612345678&company=&address=12+rue+des+Lilas&city=Lyon\
        &postalCode=69001&country=France";

    fn app() -> TestApp {
        TestApp::new(Router::new().route("/checkout", get(show).post(submit)))
    }

    #[test]
    fn test_field_errors_are_translated() {
        let details = CustomerDetails {
            first_name: "A".to_string(),
            ..CustomerDetails::default()
        };
        let errors = details.validate().unwrap_err();

        let template = CheckoutTemplate {
            page: PageContext {
                translator: Translator::new(Language::En),
                ..PageContext::default()
            },
            cart: Cart::new(),
            details,
            errors,
        };

        assert!(template.has_error("firstName"));
        assert!(!template.field_error("firstName").is_empty());
        assert!(!template.has_error("company"));
        assert_eq!(template.field_error("company"), "");
    }

    #[tokio::test]
    async fn test_valid_order_clears_cart_and_links_to_whatsapp() {
        let mut app = app();
        app.fill_cart().await;
        assert_eq!(app.cart_count().await, u64::from(FILLED_PACKAGES));

        let response = app.post_form("/checkout", DETAILS).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(r#"href="https://wa.me/212720736224?text="#));
        assert!(body.contains(r#"target="_blank""#));
        assert!(body.contains("data-open-on-load"));
        assert!(body.contains("Redirection vers WhatsApp..."));

        assert_eq!(app.cart_count().await, 0);
    }

    #[tokio::test]
    async fn test_invalid_details_keep_cart() {
        let mut app = app();
        app.fill_cart().await;

        let response = app.post_form("/checkout", "firstName=J&email=nope").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Veuillez remplir tous les champs requis"));
        assert!(body.contains("Prénom requis"));
        assert!(!body.contains("wa.me"));

        assert_eq!(app.cart_count().await, u64::from(FILLED_PACKAGES));
    }

    #[tokio::test]
    async fn test_empty_cart_goes_back_to_checkout() {
        let mut app = app();
        let response = app.post_form("/checkout", DETAILS).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/checkout");
    }
}
