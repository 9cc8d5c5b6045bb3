//! Topic management handlers

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

/// Topic routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_topics))
        .route("/", post(handler::create_topic))
}
