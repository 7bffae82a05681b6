use crate::{
    AppState, create_user, delete_user, health, method_not_allowed, not_found, show_user,
    update_user,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/v1/healthcheck", get(health::healthcheck))
        // Signup resource; there is no collection read
        .route("/v1/signup", post(create_user).get(not_found))
        .route(
            "/v1/signup/{id}",
            get(show_user).patch(update_user).delete(delete_user),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
