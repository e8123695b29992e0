//! Application service - one store round trip per operation
//!
//! Raises `NotFound` for unknown ids; every other failure is the store's.

use std::sync::Arc;

use tracing::{debug, info};

use crate::db::{ApplicationStore, StoreError};
use crate::models::{Application, ApplicationPatch, NewApplication};

/// Service-level failure
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("application {id} not found")]
    NotFound { id: i32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Orchestrates CRUD over an [`ApplicationStore`]
#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<dyn ApplicationStore>,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn ApplicationStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ApplicationStore> {
        &self.store
    }

    pub async fn create(&self, new: NewApplication) -> ServiceResult<Application> {
        let status = new.status;
        let record = self.store.insert(new).await?;
        info!(id = record.id, company = %record.company_name, %status, "application created");
        Ok(record)
    }

    /// Every record in the store's scan order. Empty store yields `[]`.
    pub async fn list_all(&self) -> ServiceResult<Vec<Application>> {
        let records = self.store.list().await?;
        debug!(count = records.len(), "listed applications");
        Ok(records)
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<Application> {
        self.store
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound { id })
    }

    /// Fetch, merge the supplied fields, persist.
    ///
    /// No version check: concurrent updates to one id are last-write-wins.
    pub async fn update(&self, id: i32, patch: ApplicationPatch) -> ServiceResult<Application> {
        let mut record = self.get_by_id(id).await?;
        if patch.is_empty() {
            debug!(id, "empty update, nothing to persist");
            return Ok(record);
        }

        patch.apply(&mut record);
        let updated = self
            .store
            .update(&record)
            .await?
            // Deleted between fetch and write
            .ok_or(ServiceError::NotFound { id })?;

        info!(id, status = %updated.status, "application updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        if !self.store.delete(id).await? {
            return Err(ServiceError::NotFound { id });
        }
        info!(id, "application deleted");
        Ok(())
    }
}
