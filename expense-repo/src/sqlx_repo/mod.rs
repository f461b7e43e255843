mod transaction_repo;

use crate::transaction_repo::TransactionRepo;
use anyhow::Context;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!();

pub struct SQLxRepo {
    pool: Pool<Postgres>,
}

impl SQLxRepo {
    pub fn new(pool: Pool<Postgres>) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

/// Connects the pool and brings the schema up to date. Connections are acquired per statement
/// and go back to the pool when the statement finishes, whether it succeeded or not.
pub async fn create_repo(
    database_url: &str,
    max_pool_size: u32,
    acquire_timeout: Duration,
) -> Result<Arc<dyn TransactionRepo>, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
        .context("Unable to connect to database")?;

    info!("Running migrations");
    MIGRATOR
        .run(&pool)
        .await
        .context("Unable to run migrations")?;

    Ok(Arc::new(SQLxRepo::new(pool)))
}
