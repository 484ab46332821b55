pub mod routes;
pub mod models;

use std::sync::Arc;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::llm::{create_finalizer, create_providers};
use crate::summarizer::Summarizer;

#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
}

pub fn create_app_state(config: &Config) -> AppState {
    AppState {
        summarizer: Arc::new(Summarizer::new(
            create_providers(config),
            create_finalizer(config),
        )),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        // The handler inspects the method itself so non-POST gets the
        // fixed plain-text rejection rather than axum's default 405.
        .route("/api/nicol", axum::routing::any(routes::nicol::ask))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
