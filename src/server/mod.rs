//! HTTP server assembly
//!
//! Routes are the thin adapter over the core: each handler calls the
//! validation layer and the injected store, nothing more.

pub mod handlers;

pub use handlers::AppState;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// `/users/search` is a static segment, so it coexists with the
/// `/users/{id}` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/users/search", get(handlers::search_users))
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .patch(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
