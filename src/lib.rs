pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, LayoutTable};
use crate::errors::BookingError;
use crate::services::backend::BackendClient;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub layouts: LayoutTable,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, BookingError> {
        let layouts = LayoutTable::load(&config.layouts.file)?;
        Self::with_layouts(config, layouts)
    }

    pub fn with_layouts(config: Config, layouts: LayoutTable) -> Result<Arc<Self>, BookingError> {
        let backend = BackendClient::from_config(&config)?;
        Ok(Arc::new(Self { config, layouts, backend }))
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Seat Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
