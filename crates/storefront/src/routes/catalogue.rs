//! Catalogue listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;
use witherstex_core::{Category, Product};

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Query parameters of the catalogue page.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogueQuery {
    pub category: Option<String>,
}

impl CatalogueQuery {
    /// The requested category. Unknown values list everything.
    fn category(&self) -> Option<Category> {
        self.category
            .as_deref()
            .and_then(|code| code.parse::<Category>().ok())
    }
}

/// Catalogue page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalogue.html")]
pub struct CatalogueTemplate {
    pub page: PageContext,
    pub products: Vec<Product>,
    pub categories: [Category; 5],
    pub selected: Option<Category>,
    /// The catalogue could not be loaded; show the error notice.
    pub load_failed: bool,
}

impl CatalogueTemplate {
    fn is_selected(&self, category: &Category) -> bool {
        self.selected.as_ref() == Some(category)
    }

    /// "3 produits trouvés", in the visitor's language.
    fn results_line(&self) -> String {
        let count = self.products.len();
        format!(
            "{count} {} {}",
            self.page
                .plural(count, "catalogue.results", "catalogue.results.plural"),
            self.page
                .plural(count, "catalogue.found", "catalogue.found.plural"),
        )
    }
}

/// Display the catalogue, optionally narrowed to one category.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogueQuery>,
    page: PageContext,
) -> impl IntoResponse {
    let selected = query.category();

    let (products, load_failed) = match state.catalogue().list_products().await {
        Ok(products) => (filter_by_category(products, selected), false),
        Err(e) => {
            tracing::error!("Failed to fetch catalogue: {e}");
            (Vec::new(), true)
        }
    };

    CatalogueTemplate {
        page,
        products,
        categories: Category::ALL,
        selected,
        load_failed,
    }
}

fn filter_by_category(products: Vec<Product>, category: Option<Category>) -> Vec<Product> {
    match category {
        Some(category) => products
            .into_iter()
            .filter(|product| product.category == category)
            .collect(),
        None => products,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use witherstex_core::{Language, ProductId, Slug, TechnicalSpecs, Translator};

    use super::*;

    fn product(id: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Gant {id}"),
            slug: Slug::from_name(&format!("Gant {id}")),
            description: String::new(),
            category,
            images: Vec::new(),
            image_url: None,
            technical_specs: TechnicalSpecs {
                material: "Polyester".to_string(),
                coating: "Nitrile".to_string(),
                sizes: "8, 9, 10".to_string(),
                certification: "EN388".to_string(),
                resistance: "4121".to_string(),
                thickness: None,
                length: None,
            },
            pcs_per_colis: 30,
            is_b2b: true,
            badge: None,
        }
    }

    #[test]
    fn test_query_category_parsing() {
        let query = CatalogueQuery {
            category: Some("thermal".to_string()),
        };
        assert_eq!(query.category(), Some(Category::Thermal));

        let query = CatalogueQuery {
            category: Some("gardening".to_string()),
        };
        assert_eq!(query.category(), None);
        assert_eq!(CatalogueQuery::default().category(), None);
    }

    #[test]
    fn test_filter_by_category() {
        let products = vec![
            product("1", Category::Thermal),
            product("2", Category::Handling),
            product("3", Category::Thermal),
        ];

        let thermal = filter_by_category(products.clone(), Some(Category::Thermal));
        assert_eq!(thermal.len(), 2);
        assert!(thermal.iter().all(|p| p.category == Category::Thermal));

        assert_eq!(filter_by_category(products, None).len(), 3);
    }

    #[test]
    fn test_results_line_pluralizes() {
        let template = |count: usize, language: Language| CatalogueTemplate {
            page: PageContext {
                translator: Translator::new(language),
                ..PageContext::default()
            },
            products: (0..count)
                .map(|i| product(&i.to_string(), Category::Industrial))
                .collect(),
            categories: Category::ALL,
            selected: None,
            load_failed: false,
        };

        assert_eq!(template(1, Language::Fr).results_line(), "1 produit trouvé");
        assert_eq!(template(4, Language::Fr).results_line(), "4 produits trouvés");
        assert_eq!(template(0, Language::En).results_line(), "0 products found");
    }
}
