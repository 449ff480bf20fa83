pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::services::{session_service::SessionService, upload_service::UploadService};

#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub upload_service: UploadService,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            session_service: SessionService::new(),
            upload_service: UploadService::new(config.uploads_dir.clone()),
        }
    }
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let quiz_api = Router::new()
        .route(
            "/upload",
            post(routes::quiz::upload_file)
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .route("/submit_answer", post(routes::quiz::submit_answer))
        .route("/get_results", get(routes::quiz::get_results))
        .route("/reset", get(routes::quiz::reset).post(routes::quiz::reset));

    let mut app = Router::new()
        .route("/health", get(routes::health::health))
        .merge(quiz_api);

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving front-end from: {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.with_state(state)
        .layer(middleware::cors::quiz_cors(
            config.cors_allowed_origin.as_deref(),
        ))
        .layer(TraceLayer::new_for_http())
}
