//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Public authentication routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/refresh", post(handler::refresh_token))
}

/// Authentication routes behind the bearer-token middleware
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/me", get(handler::get_current_user))
}
