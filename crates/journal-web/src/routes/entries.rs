//! Entry list, creation, and deletion. Every handler here is protected.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

use journal_core::storage::{EntryId, EntryStore, NewEntry};

use crate::app::{AppError, AppState};
use crate::constants::messages;
use crate::session::SessionGate;
use crate::views;

/// Form data for a new entry.
#[derive(Debug, Deserialize)]
pub struct NewEntryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// GET /
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let gate = SessionGate::new(session);
    if let Some(redirect) = gate.require_login().await? {
        return Ok(redirect.into_response());
    }

    let user = gate.current_user().await?;
    let entries = state.with_storage(|storage| storage.list_all()).await?;
    Ok(Html(views::render_index(user.as_deref(), &entries)).into_response())
}

/// GET /new
pub async fn new_form(session: Session) -> Result<Response, AppError> {
    if let Some(redirect) = SessionGate::new(session).require_login().await? {
        return Ok(redirect.into_response());
    }
    Ok(Html(views::render_new(None)).into_response())
}

/// POST /new
///
/// The body is extracted leniently so the login check runs before any
/// form parsing; an unreadable body counts as empty fields.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<NewEntryForm>, FormRejection>,
) -> Result<Response, AppError> {
    if let Some(redirect) = SessionGate::new(session).require_login().await? {
        return Ok(redirect.into_response());
    }

    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable entry form");
            return Ok(fields_required());
        }
    };

    let entry = NewEntry::new(&form.title, &form.content);
    match state
        .with_storage(move |storage| storage.create(&entry))
        .await
    {
        Ok(id) => {
            tracing::info!(id, "Entry created");
            Ok(Redirect::to("/").into_response())
        }
        Err(AppError::Storage(err)) if err.is_validation() => Ok(fields_required()),
        Err(err) => Err(err),
    }
}

fn fields_required() -> Response {
    Html(views::render_new(Some(messages::FIELDS_REQUIRED))).into_response()
}

/// GET /delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<EntryId>,
) -> Result<Response, AppError> {
    if let Some(redirect) = SessionGate::new(session).require_login().await? {
        return Ok(redirect.into_response());
    }

    let removed = state
        .with_storage(move |storage| storage.delete(id))
        .await?;
    if removed {
        tracing::info!(id, "Entry deleted");
    } else {
        tracing::debug!(id, "Delete requested for missing entry");
    }
    Ok(Redirect::to("/").into_response())
}
