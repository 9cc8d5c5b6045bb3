//! Question management handlers (admin only)

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

/// Question routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_question))
        .route("/topic/{topic_id}", get(handler::list_questions_by_topic))
}
