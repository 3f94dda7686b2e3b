//! Bookstore Server
//!
//! A REST JSON API for managing a book catalog, backed by a volatile
//! in-memory store, with pagination and HATEOAS navigation links.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let books = Router::new()
        .route("/", get(api::books::list_books))
        .route("/", post(api::books::create_book))
        .route("/:id", get(api::books::get_book))
        .route("/:id", put(api::books::update_book))
        .route("/:id", delete(api::books::delete_book))
        .with_state(state);

    Router::new()
        .route("/api/health", get(api::health::health_check))
        .nest("/api/books", books)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
