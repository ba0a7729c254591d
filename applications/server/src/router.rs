/// HTTP routing
use crate::{api, state::AppState};
use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// API routes live under `/api`. When `web_dir` is given, every other path
/// is served from it, with unknown paths falling back to `index.html` so
/// client-side routes resolve.
pub fn create_router(app_state: AppState, web_dir: Option<&Path>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/posts",
            get(api::posts::list_posts).post(api::posts::create_post),
        )
        .route("/posts/:id", get(api::posts::get_post));

    let mut router = Router::new().nest("/api", api_routes);

    if let Some(dir) = web_dir {
        tracing::info!("Serving static site from {}", dir.display());
        let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(spa);
    }

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
