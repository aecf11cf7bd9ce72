//! Admin sign-in, sign-up and sign-out.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use secrecy::ExposeSecret;
use tower_sessions::Session;
use tracing::instrument;
use witherstex_core::{AuthForm, FieldErrors};

use super::AdminAuthTemplate;
use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::middleware::admin::ADMIN_GATE_PATH;
use crate::middleware::{OptionalAdmin, PageContext, clear_current_admin, set_current_admin};
use crate::models::{CurrentAdmin, Toast};
use crate::services::toast;
use crate::state::AppState;

/// Re-render the form with what went wrong, keeping the email.
fn rejected(
    page: PageContext,
    form: AuthForm,
    signup: bool,
    errors: FieldErrors,
    auth_error: Option<&'static str>,
) -> Response {
    AdminAuthTemplate {
        email: form.email,
        errors,
        auth_error,
        ..AdminAuthTemplate::new(page, signup)
    }
    .into_response()
}

/// Sign in with email and password.
///
/// The admin role is looked up once here and kept in the session. A failed
/// role lookup signs the user in without it.
#[instrument(skip(state, session, page, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Form(form): Form<AuthForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(rejected(page, form, false, errors, None));
    }

    let auth = match state.auth().sign_in(form.email.trim(), &form.password).await {
        Ok(auth) => auth,
        Err(e) => {
            tracing::warn!(error = %e, "Admin sign-in failed");
            let key = e.toast_key();
            return Ok(rejected(page, form, false, FieldErrors::new(), Some(key)));
        }
    };

    let is_admin = state
        .auth()
        .is_admin(&auth.user_id, auth.access_token.expose_secret())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Failed to check admin role"))
        .unwrap_or(false);

    let admin = CurrentAdmin::new(auth, is_admin);
    set_current_admin(&session, &admin).await?;
    set_sentry_user(&admin.user_id, Some(&admin.email));
    tracing::info!(user_id = %admin.user_id, is_admin, "Admin signed in");

    toast::queue(&session, Toast::success("toast.loginSuccess")).await?;
    Ok(Redirect::to(ADMIN_GATE_PATH).into_response())
}

/// Create an account. The new user still needs the admin role, granted
/// in the backend, before the dashboard opens.
#[instrument(skip(state, session, page, form), fields(email = %form.email))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Form(form): Form<AuthForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(rejected(page, form, true, errors, None));
    }

    if let Err(e) = state.auth().sign_up(form.email.trim(), &form.password).await {
        tracing::warn!(error = %e, "Admin sign-up failed");
        let key = e.toast_key();
        return Ok(rejected(page, form, true, FieldErrors::new(), Some(key)));
    }

    toast::queue(&session, Toast::success("toast.accountCreated")).await?;
    Ok(Redirect::to(ADMIN_GATE_PATH).into_response())
}

/// Sign out: revoke the token and forget the user.
#[instrument(skip(state, session, admin))]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    OptionalAdmin(admin): OptionalAdmin,
) -> Result<Redirect, AppError> {
    if let Some(admin) = admin {
        state.auth().sign_out(&admin.access_token).await;
        tracing::info!(user_id = %admin.user_id, "Admin signed out");
    }

    clear_current_admin(&session).await?;
    clear_sentry_user();
    toast::queue(&session, Toast::success("toast.logoutSuccess")).await?;
    Ok(Redirect::to(ADMIN_GATE_PATH))
}
