//! Application state, router assembly, and server startup.

mod error;
mod state;

pub use error::AppError;
pub use state::{init_schema, AppState};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Settings;
use crate::constants::{MAX_BODY_SIZE, SESSION_COOKIE};
use crate::routes;

/// Build the full router: routes, session layer, tracing, and body limit.
pub fn build_router(state: AppState) -> Router {
    let mut session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_secure(false)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_signed(state.session_key().clone());
    if let Some(idle) = state.settings().session_idle_timeout {
        session_layer = session_layer.with_expiry(Expiry::OnInactivity(idle));
    }

    routes::router()
        .with_state(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
}

/// Initialize storage and serve HTTP until Ctrl-C.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    if !settings.secrets.any_configured() {
        tracing::warn!("No owner or guest password configured; nobody will be able to log in");
    }
    if settings.secret_key.is_none() {
        tracing::warn!("No secret key configured; sessions will not survive a restart");
    }
    tracing::info!(
        owner = settings.secrets.owner_name(),
        guest = settings.secrets.guest_name(),
        database = %settings.database_path.display(),
        "Starting journal"
    );

    let bind = settings.bind;
    let state = AppState::initialize(settings)?;
    let app = build_router(state);

    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind, e))?;
    tracing::info!("Journal listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Journal stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
