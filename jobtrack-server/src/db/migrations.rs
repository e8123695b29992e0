//! Schema bootstrap for the applications table
//!
//! Runs at startup. `IF NOT EXISTS` keeps it idempotent; nothing is
//! ever dropped or altered.

use sqlx::PgPool;

use super::StoreError;

/// Create the applications table if absent
pub async fn run(pool: &PgPool) -> Result<(), StoreError> {
    tracing::info!("Running application schema migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS applications (
            id SERIAL PRIMARY KEY,
            company_name TEXT NOT NULL,
            position TEXT NOT NULL,
            status TEXT NOT NULL,
            applied_date DATE NOT NULL,
            notes TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Application schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
