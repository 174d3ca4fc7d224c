//! HTTP routes.
//!
//! | Method   | Path           | Handler                 | Protected |
//! |----------|----------------|-------------------------|-----------|
//! | GET      | `/login`       | [`auth::login_form`]    | no        |
//! | POST     | `/login`       | [`auth::login`]         | no        |
//! | GET      | `/logout`      | [`auth::logout`]        | no        |
//! | GET      | `/`            | [`entries::index`]      | yes       |
//! | GET      | `/new`         | [`entries::new_form`]   | yes       |
//! | POST     | `/new`         | [`entries::create`]     | yes       |
//! | GET      | `/delete/{id}` | [`entries::delete`]     | yes       |

pub mod auth;
pub mod entries;

use axum::routing::get;
use axum::Router;

use crate::app::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entries::index))
        .route("/new", get(entries::new_form).post(entries::create))
        .route("/delete/{id}", get(entries::delete))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
}
