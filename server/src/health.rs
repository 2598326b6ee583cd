//! Liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::SharedRepository;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// The process is up and serving requests.
pub async fn live() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// The repository answers queries.
pub async fn ready(State(repo): State<SharedRepository>) -> (StatusCode, Json<HealthResponse>) {
    match repo.get_items().await {
        Ok(_) => (StatusCode::OK, Json(HealthResponse::new("healthy"))),
        Err(err) => {
            tracing::warn!(error = %err, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::new("unhealthy")),
            )
        }
    }
}
