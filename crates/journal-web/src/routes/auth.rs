//! Login and logout.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

use crate::app::{AppError, AppState};
use crate::constants::messages;
use crate::session::SessionGate;
use crate::views;

/// Form data for the login submission.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// GET /login
pub async fn login_form() -> Html<String> {
    Html(views::render_login(None))
}

/// POST /login
///
/// A missing or unreadable body is treated as a wrong password.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    let password = match form {
        Ok(Form(form)) => form.password,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable login form");
            String::new()
        }
    };

    let Some(principal) = state.secrets().authenticate(&password) else {
        tracing::warn!("Login failed");
        return Ok(Html(views::render_login(Some(messages::LOGIN_FAILED))).into_response());
    };

    SessionGate::new(session).establish(&principal).await?;
    tracing::info!(role = ?principal.role, user = %principal.display_name, "Login succeeded");
    Ok(Redirect::to("/").into_response())
}

/// GET /logout
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    SessionGate::new(session).clear().await?;
    Ok(Redirect::to("/login"))
}
