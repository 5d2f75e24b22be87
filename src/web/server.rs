use crate::domain::ports::ConfigProvider;
use crate::storage::LocalStorage;
use crate::utils::error::Result;
use crate::web::handlers;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: LocalStorage,
    pub config: Arc<dyn ConfigProvider>,
}

impl AppState {
    pub fn new(storage: LocalStorage, config: Arc<dyn ConfigProvider>) -> Self {
        Self { storage, config }
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/", get(handlers::index))
        .route("/upload", post(handlers::upload_image))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub async fn run(config: Arc<dyn ConfigProvider>) -> Result<()> {
    let storage = LocalStorage::new(config.media_root());
    let state = AppState::new(storage, config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
