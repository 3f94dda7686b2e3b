//! Bookstore Server binary
//!
//! Bootstraps configuration, tracing and the in-memory store, then serves
//! the REST API.

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use bookstore_server::{
    config::AppConfig, create_router, models::book::Book, repository::Repository,
    services::Services, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "bookstore_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookstore Server v{}", env!("CARGO_PKG_VERSION"));

    // Create the in-memory store and seed it for quick manual testing
    let repository = Repository::new();
    seed_books(&repository).await;

    let services = Services::new(repository);
    let state = AppState {
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        config.server.host.parse().expect("Invalid host address"),
        config.server.port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Seed a few books into an empty store
async fn seed_books(repository: &Repository) {
    if repository.books.count().await > 0 {
        return;
    }

    let seeds = [
        ("Clean Architecture", "Robert C. Martin", 2017),
        ("Domain-Driven Design", "Eric Evans", 2003),
        ("Refactoring", "Martin Fowler", 1999),
    ];

    for (title, author, year) in seeds {
        repository
            .books
            .add(Book {
                id: Uuid::new_v4(),
                title: title.to_string(),
                author: author.to_string(),
                year,
                created_at: Utc::now(),
                updated_at: None,
            })
            .await;
    }

    tracing::info!("Seeded {} books", seeds.len());
}
