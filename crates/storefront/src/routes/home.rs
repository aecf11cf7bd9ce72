//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;
use witherstex_core::{Category, Product};

use crate::content::{Feature, WHY_FEATURES};
use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Number of products in the featured strip.
const FEATURED_PRODUCTS: usize = 3;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    /// First products of the catalogue, empty when it could not be loaded.
    pub featured: Vec<Product>,
    /// Category tiles linking into the filtered catalogue.
    pub categories: [Category; 5],
    pub features: [Feature; 3],
}

/// Display the home page.
///
/// The featured strip is decorative: a catalogue failure is logged and the
/// page renders without it.
#[instrument(skip(state, page))]
pub async fn home(State(state): State<AppState>, page: PageContext) -> impl IntoResponse {
    let featured = state.catalogue().list_products().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch featured products: {e}");
            Vec::new()
        },
        |products| products.into_iter().take(FEATURED_PRODUCTS).collect(),
    );

    HomeTemplate {
        page,
        featured,
        categories: Category::ALL,
        features: WHY_FEATURES,
    }
}
