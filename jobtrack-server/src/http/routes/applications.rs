//! Application endpoints
//!
//! Each handler validates its input, makes one service call, and
//! serializes the result. No business logic lives here.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ApplicationId, ValidJson};
use crate::http::server::AppState;
use crate::models::{
    Application, ApplicationPatch, CreateApplicationRequest, NewApplication,
    UpdateApplicationRequest,
};

/// Confirmation body for DELETE
pub const DELETED_MESSAGE: &str = "Application deleted successfully";

/// Application response
#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub id: i32,
    pub company_name: String,
    pub position: String,
    pub status: String,
    pub applied_date: NaiveDate,
    pub notes: Option<String>,
}

impl From<Application> for ApplicationResponse {
    fn from(a: Application) -> Self {
        Self {
            id: a.id,
            company_name: a.company_name,
            position: a.position,
            status: a.status,
            applied_date: a.applied_date,
            notes: a.notes,
        }
    }
}

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// POST /applications - create a new application
async fn create_application(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationResponse>), ApiError> {
    let new = NewApplication::try_from(req)?;
    let record = state.service.create(new).await?;

    Ok((StatusCode::CREATED, Json(ApplicationResponse::from(record))))
}

/// GET /applications - list every application
async fn list_applications(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ApplicationResponse>>, ApiError> {
    let records = state.service.list_all().await?;
    Ok(Json(
        records.into_iter().map(ApplicationResponse::from).collect(),
    ))
}

/// GET /applications/{id} - get a single application
async fn get_application(
    State(state): State<Arc<AppState>>,
    ApplicationId(id): ApplicationId,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let record = state.service.get_by_id(id).await?;
    Ok(Json(ApplicationResponse::from(record)))
}

/// PUT /applications/{id} - partial update
async fn update_application(
    State(state): State<Arc<AppState>>,
    ApplicationId(id): ApplicationId,
    ValidJson(req): ValidJson<UpdateApplicationRequest>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let patch = ApplicationPatch::try_from(req)?;
    let record = state.service.update(id, patch).await?;
    Ok(Json(ApplicationResponse::from(record)))
}

/// DELETE /applications/{id}
async fn delete_application(
    State(state): State<Arc<AppState>>,
    ApplicationId(id): ApplicationId,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.service.delete(id).await?;
    Ok(Json(DeleteResponse {
        message: DELETED_MESSAGE,
    }))
}

/// Application routes. Collection paths answer with and without the
/// trailing slash.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/applications",
            get(list_applications).post(create_application),
        )
        .route(
            "/applications/",
            get(list_applications).post(create_application),
        )
        .route(
            "/applications/{id}",
            get(get_application)
                .put(update_application)
                .delete(delete_application),
        )
}
