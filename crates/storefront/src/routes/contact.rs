//! Contact form route handlers.
//!
//! Messages are not forwarded anywhere yet; a valid submission is logged
//! and acknowledged.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;
use witherstex_core::{ContactForm, ContactSubject, FieldErrors};

use crate::content::{COMPANY, Company};
use crate::error::AppError;
use crate::filters;
use crate::middleware::PageContext;
use crate::models::Toast;
use crate::services::toast;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub subjects: [ContactSubject; 5],
    pub company: Company,
}

impl ContactTemplate {
    fn new(page: PageContext, form: ContactForm, errors: FieldErrors) -> Self {
        Self {
            page,
            form,
            errors,
            subjects: ContactSubject::ALL,
            company: COMPANY,
        }
    }

    fn has_error(&self, field: &str) -> bool {
        self.errors.contains(field)
    }

    /// Translated message for `field`, empty when it is valid.
    fn field_error(&self, field: &str) -> &'static str {
        self.errors.get(field).map_or("", |key| self.page.t(key))
    }

    fn is_subject(&self, subject: &ContactSubject) -> bool {
        self.form.subject.trim() == subject.as_str()
    }
}

/// Display the contact page.
#[instrument(skip(page))]
pub async fn show(page: PageContext) -> impl IntoResponse {
    ContactTemplate::new(page, ContactForm::default(), FieldErrors::new())
}

/// Handle a contact form submission.
///
/// Invalid input re-renders the form with the visitor's values and inline
/// errors. A valid message is logged, acknowledged with a toast and the
/// form is reset by redirecting back to it.
#[instrument(skip(session, page, form), fields(subject = %form.subject))]
pub async fn submit(
    session: Session,
    page: PageContext,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(ContactTemplate::new(page, form, errors).into_response());
    }

    tracing::info!(
        name = %form.name.trim(),
        email = %form.email.trim(),
        company = %form.company.trim(),
        phone = %form.phone.trim(),
        message = %form.message.trim(),
        "Contact form submitted"
    );

    toast::queue(&session, Toast::success("contact.form.success")).await?;
    Ok(Redirect::to("/contact").into_response())
}
