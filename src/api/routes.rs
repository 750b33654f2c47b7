//! API Routes
//!
//! Configures the Axum router with all user service endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, ping_handler,
    update_user_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /ping` - Health check
/// - `POST /user/create` - Store a new user under a fresh id
/// - `GET /user/:id` - Fetch a user
/// - `PUT /user/update/:id` - Replace a user
/// - `DELETE /user/:id` - Remove a user
///
/// # Middleware
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/user/create", post(create_user_handler))
        .route("/user/update/:id", put(update_user_handler))
        .route("/user/:id", get(get_user_handler).delete(delete_user_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
