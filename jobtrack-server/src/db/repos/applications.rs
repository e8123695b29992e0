//! Application repository backed by Postgres
//!
//! - insert/update: single statement with RETURNING
//! - list: plain table scan, no ORDER BY (storage order)
//! - delete: conditional DELETE, rows_affected decides existence

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{ApplicationStore, StoreError};
use crate::models::{Application, NewApplication};

/// Application repository
#[derive(Debug, Clone)]
pub struct PgApplicationRepo {
    pool: PgPool,
}

impl PgApplicationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationRepo {
    async fn insert(&self, new: NewApplication) -> Result<Application, StoreError> {
        let record: Application = sqlx::query_as(
            r#"
            INSERT INTO applications (company_name, position, status, applied_date, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, company_name, position, status, applied_date, notes
            "#,
        )
        .bind(new.company_name.as_str())
        .bind(new.position.as_str())
        .bind(new.status.as_str())
        .bind(new.applied_date)
        .bind(new.notes.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Application>, StoreError> {
        let records: Vec<Application> = sqlx::query_as(
            r#"
            SELECT id, company_name, position, status, applied_date, notes
            FROM applications
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn get(&self, id: i32) -> Result<Option<Application>, StoreError> {
        let record: Option<Application> = sqlx::query_as(
            r#"
            SELECT id, company_name, position, status, applied_date, notes
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn update(&self, record: &Application) -> Result<Option<Application>, StoreError> {
        let updated: Option<Application> = sqlx::query_as(
            r#"
            UPDATE applications
            SET company_name = $2,
                position = $3,
                status = $4,
                applied_date = $5,
                notes = $6
            WHERE id = $1
            RETURNING id, company_name, position, status, applied_date, notes
            "#,
        )
        .bind(record.id)
        .bind(&record.company_name)
        .bind(&record.position)
        .bind(&record.status)
        .bind(record.applied_date)
        .bind(record.notes.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::db::{create_pool, migrations};
    use crate::models::{ApplicationStatus, CompanyName, Position};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p jobtrack-server -- --ignored

    async fn repo() -> PgApplicationRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgApplicationRepo::new(pool)
    }

    fn acme() -> NewApplication {
        NewApplication {
            company_name: CompanyName::new("Acme").unwrap(),
            position: Position::new("Engineer").unwrap(),
            status: ApplicationStatus::Applied,
            applied_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            notes: None,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get_round_trips() {
        let repo = repo().await;
        let created = repo.insert(acme()).await.expect("insert failed");
        let fetched = repo.get(created.id).await.expect("get failed");
        assert_eq!(fetched, Some(created.clone()));

        assert!(repo.delete(created.id).await.expect("delete failed"));
        assert!(!repo.delete(created.id).await.expect("delete failed"));
        assert_eq!(repo.get(created.id).await.expect("get failed"), None);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_returns_persisted_row() {
        let repo = repo().await;
        let mut record = repo.insert(acme()).await.expect("insert failed");
        record.status = "Offer".into();
        record.notes = Some("verbal offer".into());

        let updated = repo.update(&record).await.expect("update failed");
        assert_eq!(updated, Some(record.clone()));

        repo.delete(record.id).await.expect("delete failed");
        assert_eq!(repo.update(&record).await.expect("update failed"), None);
    }
}
