// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    http::Request,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

/// `static_dir` must contain `index.html`; assets live in its `static/` folder.
/// CORS is wide open because the widget is embedded on other origins.
pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let static_dir = static_dir.as_ref();

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .nest_service("/static", ServeDir::new(static_dir.join("static")))
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
            info_span!(
                "http_request",
                request_id = %Uuid::new_v4(),
                method = %req.method(),
                path = %req.uri().path(),
            )
        }))
        .layer(CorsLayer::very_permissive())
}
