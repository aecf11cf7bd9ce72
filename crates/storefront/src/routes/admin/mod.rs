//! Admin panel.
//!
//! `/admin` is a gate: guests get the sign-in form, signed-in users without
//! the admin role get an access-denied notice, admins get the product
//! dashboard. Product management routes require [`RequireAdmin`].
//!
//! [`RequireAdmin`]: crate::middleware::RequireAdmin

pub mod auth;
pub mod products;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::instrument;
use witherstex_core::{FieldErrors, Product};

use crate::filters;
use crate::middleware::{OptionalAdmin, PageContext, auth_rate_limiter};
use crate::state::AppState;

/// Room for the largest accepted image (5 MiB) plus the other form fields.
const PRODUCT_FORM_BODY_LIMIT: usize = 6 * 1024 * 1024;

/// Create the admin routes router, nested under `/admin`.
pub fn routes() -> Router<AppState> {
    let limiter = auth_rate_limiter();

    let products = Router::new()
        .route("/", post(products::create))
        .route("/new", get(products::new_form))
        .route("/{id}", post(products::update))
        .route("/{id}/edit", get(products::edit_form))
        .route("/{id}/delete", post(products::delete))
        .layer(DefaultBodyLimit::max(PRODUCT_FORM_BODY_LIMIT));

    Router::new()
        .route("/", get(index))
        .route("/login", post(auth::login).layer(limiter.clone()))
        .route("/signup", post(auth::signup).layer(limiter))
        .route("/logout", post(auth::logout))
        .nest("/products", products)
}

/// Query parameters of the gate page.
#[derive(Debug, Default, Deserialize)]
pub struct GateQuery {
    /// `signup` shows the account creation form.
    pub mode: Option<String>,
}

impl GateQuery {
    fn is_signup(&self) -> bool {
        self.mode.as_deref() == Some("signup")
    }
}

/// Sign-in / sign-up form.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct AdminAuthTemplate {
    pub page: PageContext,
    pub email: String,
    pub signup: bool,
    pub errors: FieldErrors,
    /// Dictionary key of a failure reported by the auth service.
    pub auth_error: Option<&'static str>,
}

impl AdminAuthTemplate {
    #[must_use]
    pub fn new(page: PageContext, signup: bool) -> Self {
        Self {
            page,
            email: String::new(),
            signup,
            errors: FieldErrors::new(),
            auth_error: None,
        }
    }

    fn has_error(&self, field: &str) -> bool {
        self.errors.contains(field)
    }

    fn field_error(&self, field: &str) -> &'static str {
        self.errors.get(field).map_or("", |key| self.page.t(key))
    }

    fn auth_error_message(&self) -> &'static str {
        self.auth_error.map_or("", |key| self.page.t(key))
    }

    /// Form target for the current mode.
    const fn action(&self) -> &'static str {
        if self.signup {
            "/admin/signup"
        } else {
            "/admin/login"
        }
    }
}

/// Signed in without the admin role.
#[derive(Template, WebTemplate)]
#[template(path = "admin/denied.html")]
pub struct AdminDeniedTemplate {
    pub page: PageContext,
    pub email: String,
}

/// Product list with edit and delete actions.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub page: PageContext,
    pub email: String,
    pub products: Vec<Product>,
    pub load_failed: bool,
}

/// The `/admin` gate.
#[instrument(skip(state, admin, page))]
pub async fn index(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
    Query(query): Query<GateQuery>,
    page: PageContext,
) -> Response {
    let Some(admin) = admin else {
        return AdminAuthTemplate::new(page, query.is_signup()).into_response();
    };

    if !admin.is_admin {
        return AdminDeniedTemplate {
            page,
            email: admin.email,
        }
        .into_response();
    }

    let (products, load_failed) = match state.catalogue().list_products().await {
        Ok(products) => (products, false),
        Err(e) => {
            tracing::error!("Failed to fetch products for the dashboard: {e}");
            (Vec::new(), true)
        }
    };

    AdminDashboardTemplate {
        page,
        email: admin.email,
        products,
        load_failed,
    }
    .into_response()
}
