//! HTTP surface for the items service.
//!
//! # Design
//! The router is built around a `SharedRepository` trait object so tests and
//! the binary can plug in any backend. `InMemItemsRepository` is the only
//! backend shipped here.

use std::sync::Arc;

use axum::{routing::get, Router};
use items_core::ItemsRepository;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod controller;
pub mod error;
pub mod health;
pub mod logging;
pub mod repository;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use repository::InMemItemsRepository;

pub type SharedRepository = Arc<dyn ItemsRepository>;

pub fn app(repository: SharedRepository) -> Router {
    Router::new()
        .route(
            "/items",
            get(controller::get_items).post(controller::create_item),
        )
        .route(
            "/items/{id}",
            get(controller::get_item)
                .put(controller::update_item)
                .delete(controller::delete_item),
        )
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .layer(TraceLayer::new_for_http())
        .with_state(repository)
}

pub async fn run(listener: TcpListener, repository: SharedRepository) -> Result<(), std::io::Error> {
    axum::serve(listener, app(repository))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
