//! In-memory store for tests and `--in-memory` runs
//!
//! The id counter and the record list live behind one lock, so id
//! allocation and append happen together.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{Application, NewApplication};
use super::{ApplicationStore, StoreError};

#[derive(Debug)]
struct Inner {
    next_id: i32,
    rows: Vec<Application>,
}

/// Process-local application store
#[derive(Debug)]
pub struct MemoryApplicationStore {
    inner: Mutex<Inner>,
}

impl MemoryApplicationStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryApplicationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplicationStore for MemoryApplicationStore {
    async fn insert(&self, new: NewApplication) -> Result<Application, StoreError> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        // Monotonic: ids are never handed out twice, even after delete
        inner.next_id += 1;

        let record = new.into_record(id);
        inner.rows.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Application>, StoreError> {
        Ok(self.inner.lock().await.rows.clone())
    }

    async fn get(&self, id: i32) -> Result<Option<Application>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn update(&self, record: &Application) -> Result<Option<Application>, StoreError> {
        let mut inner = self.inner.lock().await;
        Ok(inner.rows.iter_mut().find(|r| r.id == record.id).map(|row| {
            *row = record.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;
        let before = inner.rows.len();
        inner.rows.retain(|r| r.id != id);
        Ok(inner.rows.len() != before)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.lock().await.rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::models::{ApplicationStatus, CompanyName, Position};

    fn new_app(company: &str) -> NewApplication {
        NewApplication {
            company_name: CompanyName::new(company).unwrap(),
            position: Position::new("Engineer").unwrap(),
            status: ApplicationStatus::Applied,
            applied_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryApplicationStore::new();
        let a = store.insert(new_app("Acme")).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());

        let b = store.insert(new_app("Globex")).await.unwrap();
        assert!(b.id > a.id);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryApplicationStore::new();
        for name in ["a", "b", "c"] {
            store.insert(new_app(name)).await.unwrap();
        }
        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.company_name)
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_missing_row_is_none() {
        let store = MemoryApplicationStore::new();
        let ghost = new_app("Acme").into_record(42);
        assert!(store.update(&ghost).await.unwrap().is_none());
        assert!(!store.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(MemoryApplicationStore::new());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .insert(new_app(&format!("company-{i}")))
                        .await
                        .expect("insert failed")
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("task panicked"));
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(store.count().await.unwrap(), 20);
    }
}
