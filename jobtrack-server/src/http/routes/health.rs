//! Health check and service banner

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Human-facing service name
pub const SERVICE_NAME: &str = "Job Application Tracker API";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Root banner response
#[derive(Serialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /
async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: format!("{SERVICE_NAME} is running"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn banner_names_service() {
        let Json(body) = banner().await;
        assert_eq!(body.message, "Job Application Tracker API is running");
    }
}
