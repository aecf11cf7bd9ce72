//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;
use witherstex_core::checkout::{compose_product_inquiry, whatsapp_link};
use witherstex_core::{MIN_ORDER_PACKAGES, Product};

use crate::filters;
use crate::middleware::PageContext;
use crate::models::Toast;
use crate::state::AppState;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub page: PageContext,
    pub product: Product,
    /// `wa.me` link asking about this product.
    pub inquiry_link: String,
    pub min_packages: u32,
}

impl ProductShowTemplate {
    fn pieces_per_package(&self) -> String {
        self.page
            .fill("product.piecesPerPackage", "count", self.product.pcs_per_colis)
    }

    fn min_order(&self) -> String {
        self.page.fill("product.minOrder", "count", self.min_packages)
    }

    fn min_pieces(&self) -> String {
        self.page
            .fill("product.minPieces", "count", self.product.min_order_pieces())
    }
}

/// Product not found page, with a way back to the catalogue.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub page: PageContext,
}

/// Display a product by slug.
///
/// When the catalogue cannot be reached the failure is logged and the
/// not-found page is shown with an error notification.
#[instrument(skip(state, page))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    mut page: PageContext,
) -> Response {
    let product = match state.catalogue().get_product_by_slug(&slug).await {
        Ok(Some(product)) => product,
        Ok(None) => return not_found(page),
        Err(e) => {
            tracing::error!(slug = %slug, error = %e, "Failed to fetch product");
            page.toast = Some(Toast::error("toast.error"));
            return not_found(page);
        }
    };

    let inquiry = compose_product_inquiry(page.translator, &product.name);
    let inquiry_link = whatsapp_link(&state.config().whatsapp.contact_number, &inquiry);

    ProductShowTemplate {
        page,
        product,
        inquiry_link,
        min_packages: MIN_ORDER_PACKAGES,
    }
    .into_response()
}

fn not_found(page: PageContext) -> Response {
    (StatusCode::NOT_FOUND, ProductNotFoundTemplate { page }).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, routing::get};
    use witherstex_core::{Category, Language, ProductId, Slug, TechnicalSpecs, Translator};

    use super::*;
    use crate::test_support::{TestApp, body_text};

    #[test]
    fn test_order_notes_are_filled() {
        let product = Product {
            id: ProductId::new("9"),
            name: "Thermo Grip".to_string(),
            slug: Slug::from_name("Thermo Grip"),
            description: String::new(),
            category: Category::Thermal,
            images: Vec::new(),
            image_url: None,
            technical_specs: TechnicalSpecs {
                material: "Acrylique".to_string(),
                coating: "Latex".to_string(),
                sizes: "9, 10".to_string(),
                certification: "EN511".to_string(),
                resistance: "X2X".to_string(),
                thickness: None,
                length: None,
            },
            pcs_per_colis: 12,
            is_b2b: true,
            badge: None,
        };
        let template = ProductShowTemplate {
            page: PageContext {
                translator: Translator::new(Language::En),
                ..PageContext::default()
            },
            product,
            inquiry_link: String::new(),
            min_packages: MIN_ORDER_PACKAGES,
        };

        assert_eq!(template.pieces_per_package(), "Each package contains 12 pieces");
        assert_eq!(template.min_order(), "Minimum order quantity: 10 packages");
        assert_eq!(template.min_pieces(), "That is a minimum of 120 pieces per order");
    }

    #[tokio::test]
    async fn test_unreachable_catalogue_shows_not_found_with_error() {
        let mut app = TestApp::new(Router::new().route("/products/{slug}", get(show)));
        let response = app.get("/products/progrip-nitrile").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_text(response).await;
        assert!(body.contains("Produit non trouvé"));
        assert!(body.contains("Une erreur est survenue"));
        assert!(body.contains("toast--error"));
    }
}
