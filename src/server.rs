//! HTTP server and routes.

mod handlers;
mod state;

pub use state::AppState;

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::get,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Policy sent with every image response.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'none'; sandbox;";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let image_routes = Router::new()
        .route("/covers/{width}/{height}/{*path}", get(handlers::cover))
        .route("/placeholder/{width}/{height}", get(handlers::placeholder))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(image_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
