//! Product management: create, edit, delete.
//!
//! Product forms are `multipart/form-data` so an image can travel with the
//! other fields. The image is validated, then uploaded only once the rest of
//! the form is known to be valid.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    body::Bytes,
    extract::{Multipart, Path, State, multipart::MultipartError},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;
use witherstex_core::{Category, ImageUpload, Product, ProductDraft, ProductId, UploadError};

use crate::error::AppError;
use crate::filters;
use crate::middleware::admin::ADMIN_GATE_PATH;
use crate::middleware::{PageContext, RequireAdmin};
use crate::models::{CurrentAdmin, Toast};
use crate::services::toast;
use crate::state::AppState;

/// Add / edit product form.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_form.html")]
pub struct ProductFormTemplate {
    pub page: PageContext,
    pub draft: ProductDraft,
    /// The product being edited; `None` when adding.
    pub product: Option<Product>,
    pub categories: [Category; 5],
}

impl ProductFormTemplate {
    fn new(page: PageContext, draft: ProductDraft, product: Option<Product>) -> Self {
        Self {
            page,
            draft,
            product,
            categories: Category::ALL,
        }
    }

    fn action(&self) -> String {
        self.product.as_ref().map_or_else(
            || "/admin/products".to_string(),
            |product| format!("/admin/products/{}", product.id),
        )
    }

    fn title_key(&self) -> &'static str {
        if self.product.is_some() {
            "admin.editProduct"
        } else {
            "admin.newProduct"
        }
    }

    fn submit_key(&self) -> &'static str {
        if self.product.is_some() {
            "admin.save"
        } else {
            "admin.add"
        }
    }

    fn is_category(&self, category: &Category) -> bool {
        self.draft.category == *category
    }

    /// Image currently stored for the product being edited.
    fn current_image(&self) -> Option<&str> {
        self.product
            .as_ref()
            .and_then(|product| product.image_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Re-render the form with an error notification.
fn rejected(
    mut page: PageContext,
    draft: ProductDraft,
    product: Option<Product>,
    toast_key: &'static str,
) -> Response {
    page.toast = Some(Toast::error(toast_key));
    ProductFormTemplate::new(page, draft, product).into_response()
}

/// A decoded product form.
struct ProductSubmission {
    draft: ProductDraft,
    /// The chosen image, if any, with its validation outcome.
    image: Option<Result<(ImageUpload, Bytes), UploadError>>,
}

fn bad_multipart(e: MultipartError) -> AppError {
    AppError::BadRequest(format!("invalid product form: {e}"))
}

/// Decode the multipart product form.
async fn read_submission(mut multipart: Multipart) -> Result<ProductSubmission, AppError> {
    let mut draft = ProductDraft::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_owned();
            let content_type = field.content_type().unwrap_or_default().to_owned();
            let bytes = field.bytes().await.map_err(bad_multipart)?;
            // An empty file input still sends a nameless, empty part.
            if file_name.is_empty() && bytes.is_empty() {
                continue;
            }
            let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
            image = Some(
                ImageUpload::validate(&file_name, &content_type, size).map(|upload| (upload, bytes)),
            );
            continue;
        }

        let value = field.text().await.map_err(bad_multipart)?;
        match name.as_str() {
            "name" => draft.name = value,
            "slug" => draft.slug = value,
            "description" => draft.description = value,
            "category" => {
                draft.category = value
                    .parse()
                    .map_err(|e| AppError::BadRequest(format!("{e}")))?;
            }
            "pcs_per_colis" => draft.pcs_per_colis = value,
            "sizes" => draft.sizes = value,
            "material" => draft.material = value,
            "remove_image" => draft.remove_image = !value.is_empty(),
            _ => {}
        }
    }

    Ok(ProductSubmission { draft, image })
}

/// Upload a validated image with the admin's token.
async fn upload(
    state: &AppState,
    admin: &CurrentAdmin,
    upload: &ImageUpload,
    bytes: Bytes,
) -> Result<String, &'static str> {
    state
        .storage()
        .upload_image(upload, bytes.to_vec(), &admin.access_token)
        .await
        .inspect(|url| tracing::info!(url = %url, "Product image uploaded"))
        .map_err(|e| {
            tracing::error!(error = %e, "Product image upload failed");
            "toast.uploadError"
        })
}

/// Load the product being edited.
///
/// A missing product or an unreachable catalogue queues an error
/// notification and sends the admin back to the dashboard.
async fn load_product(
    state: &AppState,
    session: &Session,
    id: &ProductId,
) -> Result<Result<Product, Redirect>, AppError> {
    let toast = match state.catalogue().find_product(id).await {
        Ok(Some(product)) => return Ok(Ok(product)),
        Ok(None) => {
            tracing::warn!(id = %id, "Product to edit not found");
            Toast::error("product.notFound")
        }
        Err(e) => {
            tracing::error!(id = %id, error = %e, "Failed to fetch product to edit");
            Toast::error("toast.error")
        }
    };

    toast::queue(session, toast).await?;
    Ok(Err(Redirect::to(ADMIN_GATE_PATH)))
}

/// New product form.
#[instrument(skip(_admin, page))]
pub async fn new_form(RequireAdmin(_admin): RequireAdmin, page: PageContext) -> impl IntoResponse {
    ProductFormTemplate::new(page, ProductDraft::default(), None)
}

/// Create a product.
#[instrument(skip(state, admin, session, page, multipart), fields(user_id = %admin.user_id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    session: Session,
    page: PageContext,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let ProductSubmission { draft, image } = read_submission(multipart).await?;

    let image = match image.transpose() {
        Ok(image) => image,
        Err(e) => return Ok(rejected(page, draft, None, e.toast_key())),
    };

    let mut product = match draft.clone().into_new_product() {
        Ok(product) => product,
        Err(e) => return Ok(rejected(page, draft, None, e.toast_key())),
    };

    if let Some((image, bytes)) = image {
        match upload(&state, &admin, &image, bytes).await {
            Ok(url) => product.image_url = Some(url),
            Err(key) => return Ok(rejected(page, draft, None, key)),
        }
    }

    match state.catalogue().create_product(&product, &admin.access_token).await {
        Ok(created) => {
            tracing::info!(id = %created.id, slug = %created.slug, "Product created");
            toast::queue(&session, Toast::success("toast.productCreated")).await?;
            Ok(Redirect::to(ADMIN_GATE_PATH).into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create product");
            Ok(rejected(page, draft, None, "toast.productCreateError"))
        }
    }
}

/// Edit product form.
#[instrument(skip(state, _admin, session, page))]
pub async fn edit_form(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
    session: Session,
    page: PageContext,
) -> Result<Response, AppError> {
    let product = match load_product(&state, &session, &ProductId::new(id)).await? {
        Ok(product) => product,
        Err(back) => return Ok(back.into_response()),
    };
    let draft = ProductDraft::from_product(&product);
    Ok(ProductFormTemplate::new(page, draft, Some(product)).into_response())
}

/// Update a product. Only fields the form edits are sent.
#[instrument(skip(state, admin, session, page, multipart), fields(user_id = %admin.user_id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
    session: Session,
    page: PageContext,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let existing = match load_product(&state, &session, &ProductId::new(id)).await? {
        Ok(product) => product,
        Err(back) => return Ok(back.into_response()),
    };
    let ProductSubmission { draft, image } = read_submission(multipart).await?;

    let image = match image.transpose() {
        Ok(image) => image,
        Err(e) => return Ok(rejected(page, draft, Some(existing), e.toast_key())),
    };

    let mut changes = match draft.clone().into_update(&existing) {
        Ok(changes) => changes,
        Err(e) => return Ok(rejected(page, draft, Some(existing), e.toast_key())),
    };

    if let Some((image, bytes)) = image {
        match upload(&state, &admin, &image, bytes).await {
            Ok(url) => changes.image_url = Some(Some(url)),
            Err(key) => return Ok(rejected(page, draft, Some(existing), key)),
        }
    }

    match state
        .catalogue()
        .update_product(&existing.id, &changes, &admin.access_token)
        .await
    {
        Ok(updated) => {
            tracing::info!(id = %updated.id, "Product updated");
            toast::queue(&session, Toast::success("toast.productUpdated")).await?;
            Ok(Redirect::to(ADMIN_GATE_PATH).into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to update product");
            Ok(rejected(page, draft, Some(existing), "toast.productUpdateError"))
        }
    }
}

/// Delete a product and return to the dashboard.
#[instrument(skip(state, admin, session), fields(user_id = %admin.user_id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
    session: Session,
) -> Result<Redirect, AppError> {
    let id = ProductId::new(id);
    let toast = match state.catalogue().delete_product(&id, &admin.access_token).await {
        Ok(()) => {
            tracing::info!(id = %id, "Product deleted");
            Toast::success("toast.productDeleted")
        }
        Err(e) => {
            tracing::error!(id = %id, error = %e, "Failed to delete product");
            Toast::error("toast.productDeleteError")
        }
    };

    toast::queue(&session, toast).await?;
    Ok(Redirect::to(ADMIN_GATE_PATH))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::extract::FromRequest;
    use axum::{Router, http::StatusCode, routing::get};
    use witherstex_core::{Slug, TechnicalSpecs};

    use super::*;
    use crate::test_support::{TestApp, location};

    const BOUNDARY: &str = "X-WITHERSTEX-BOUNDARY";

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(file_name: &str, content_type: &str, body: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n{body}\r\n"
        )
    }

    async fn submit(parts: &[String]) -> Result<ProductSubmission, AppError> {
        let body = format!("{}--{BOUNDARY}--\r\n", parts.concat());
        let request = axum::http::Request::builder()
            .method("POST")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(axum::body::Body::from(body))
            .unwrap();
        let multipart = Multipart::from_request(request, &()).await.unwrap();
        read_submission(multipart).await
    }

    #[tokio::test]
    async fn test_reads_fields_and_image() {
        let submission = submit(&[
            text_part("name", "Thermo Grip"),
            text_part("category", "thermal"),
            text_part("pcs_per_colis", "12"),
            text_part("sizes", "9, 10"),
            file_part("grip.JPG", "image/jpeg", "jpegdata"),
        ])
        .await
        .unwrap();

        assert_eq!(submission.draft.name, "Thermo Grip");
        assert_eq!(submission.draft.category, Category::Thermal);
        assert_eq!(submission.draft.pcs_per_colis, "12");
        assert!(!submission.draft.remove_image);

        let (upload, bytes) = submission.image.unwrap().unwrap();
        assert_eq!(upload.extension(), "jpg");
        assert_eq!(&bytes[..], b"jpegdata");
    }

    #[tokio::test]
    async fn test_empty_file_input_means_no_image() {
        let submission = submit(&[
            text_part("name", "Gant"),
            file_part("", "application/octet-stream", ""),
            text_part("remove_image", "on"),
        ])
        .await
        .unwrap();

        assert!(submission.image.is_none());
        assert!(submission.draft.remove_image);
    }

    #[tokio::test]
    async fn test_non_image_file_is_reported() {
        let submission = submit(&[
            text_part("name", "Gant"),
            file_part("notes.pdf", "application/pdf", "%PDF"),
        ])
        .await
        .unwrap();

        let error = submission.image.unwrap().unwrap_err();
        assert_eq!(error.toast_key(), "toast.selectImage");
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let result = submit(&[text_part("category", "gardening")]).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_form_targets() {
        let adding = ProductFormTemplate::new(PageContext::default(), ProductDraft::default(), None);
        assert_eq!(adding.action(), "/admin/products");
        assert_eq!(adding.title_key(), "admin.newProduct");
        assert!(adding.current_image().is_none());

        let product = Product {
            id: ProductId::new("42"),
            name: "Gant".to_string(),
            slug: Slug::from_name("Gant"),
            description: String::new(),
            category: Category::Chemical,
            images: Vec::new(),
            image_url: Some("https://cdn.example/gant.png".to_string()),
            technical_specs: TechnicalSpecs {
                material: "Nitrile".to_string(),
                coating: "Nitrile".to_string(),
                sizes: "8".to_string(),
                certification: "EN374".to_string(),
                resistance: "JKL".to_string(),
                thickness: None,
                length: None,
            },
            pcs_per_colis: 100,
            is_b2b: true,
            badge: None,
        };
        let draft = ProductDraft::from_product(&product);
        let editing = ProductFormTemplate::new(PageContext::default(), draft, Some(product));
        assert_eq!(editing.action(), "/admin/products/42");
        assert_eq!(editing.submit_key(), "admin.save");
        assert!(editing.is_category(&Category::Chemical));
        assert_eq!(editing.current_image(), Some("https://cdn.example/gant.png"));
    }

    #[tokio::test]
    async fn test_edit_with_unreachable_catalogue_returns_to_dashboard() {
        let mut app = TestApp::new(
            Router::new().route("/admin/products/{id}/edit", get(edit_form)),
        );
        app.sign_in_admin().await;

        let response = app.get("/admin/products/42/edit").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), ADMIN_GATE_PATH);
        assert_eq!(app.take_toast().await, "toast.error");
    }

    #[tokio::test]
    async fn test_edit_requires_admin() {
        let mut app = TestApp::new(
            Router::new().route("/admin/products/{id}/edit", get(edit_form)),
        );

        let response = app.get("/admin/products/42/edit").await;
        assert_eq!(location(&response), ADMIN_GATE_PATH);
        assert_eq!(app.take_toast().await, "");
    }
}
