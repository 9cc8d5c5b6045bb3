//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod certificates;
pub mod exams;
pub mod health;
pub mod questions;
pub mod topics;

use axum::{middleware, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
///
/// Everything except health and the login/refresh endpoints sits behind the
/// bearer-token middleware; role checks happen inside the handlers.
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/auth", auth::protected_routes())
        .nest("/topics", topics::routes())
        .nest("/questions", questions::routes())
        .nest("/exams", exams::routes())
        .nest("/admin", admin::routes())
        .nest("/certificates", certificates::routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .merge(protected)
}
