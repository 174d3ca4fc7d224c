//! # Journal Web
//!
//! HTTP front end for Journal: login with a shared password, then list,
//! create, and delete entries. Pages are rendered on the server; the only
//! client state is the signed session cookie.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod routes;
pub mod session;
pub mod views;

pub use app::{build_router, serve, AppState};
pub use config::Settings;
