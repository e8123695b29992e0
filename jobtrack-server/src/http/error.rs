//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses carrying the HTTP status and a
//! human-readable `detail`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;
use crate::service::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Domain validation failed (422)
    Validation(ValidationError),

    /// Body could not be read as the expected payload shape (422, or the
    /// extractor's own status for content-type/size problems)
    Payload { status: StatusCode, detail: String },

    /// Path parameter malformed (422)
    InvalidPath { detail: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i32 },

    /// Store failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidPath { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Payload { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => json!({
                "error": "validation_error",
                "status": status.as_u16(),
                "field": e.field(),
                "detail": e.to_string()
            }),
            Self::Payload { detail, .. } => json!({
                "error": "invalid_payload",
                "status": status.as_u16(),
                "detail": detail
            }),
            Self::InvalidPath { detail } => json!({
                "error": "invalid_path",
                "status": status.as_u16(),
                "detail": detail
            }),
            Self::NotFound { resource, id } => json!({
                "error": "not_found",
                "status": status.as_u16(),
                "id": id,
                "detail": format!("{} not found", resource)
            }),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store error: {}", e);
                json!({
                    "error": "internal_error",
                    "status": status.as_u16(),
                    "detail": "an internal error occurred"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { id } => Self::NotFound {
                resource: "Application",
                id,
            },
            ServiceError::Store(e) => Self::Store(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Anything that is not a readable JSON payload is 422; body-size and
        // read failures keep their own status
        let status = match &rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            other => other.status(),
        };
        Self::Payload {
            status,
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath {
            detail: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::Empty { field: "position" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["field"], "position");
        assert_eq!(body["detail"], "position cannot be empty");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(ServiceError::NotFound { id: 3 });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["detail"], "Application not found");
    }

    #[tokio::test]
    async fn store_error_hides_cause() {
        let err = ApiError::from(ServiceError::Store(StoreError::Sqlx(
            sqlx::Error::PoolTimedOut,
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "an internal error occurred");
    }
}
