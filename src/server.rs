//! HTTP server initialization and runtime setup.
//!
//! Handles the MongoDB connection, repository construction, and Axum server
//! lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::MongoBookRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::Client;
use mongodb::bson::doc;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client and liveness ping
/// - Book repository over the `books` and `authors` collections
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The store is unreachable (connect or ping fails; no retry)
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongodb_url).await?;
    let database = client.database(&config.database_name);

    // Fail fast at startup: an unanswered ping aborts the process.
    database.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to MongoDB");

    let books = Arc::new(MongoBookRepository::new(&database));
    let state = AppState::new(books);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
