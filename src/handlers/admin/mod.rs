//! Admin management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/dashboard", get(handler::get_dashboard_stats))
        // User management
        .route("/users", get(handler::list_users))
        .route("/users", post(handler::create_user))
        .route("/users/{id}", put(handler::update_user))
        .route("/users/{id}", delete(handler::deactivate_user))
        // Results
        .route("/results", get(handler::list_results))
        .route("/results/user/{user_id}", get(handler::get_user_results))
}
