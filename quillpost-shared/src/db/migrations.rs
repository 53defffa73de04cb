/// Database migration runner
///
/// Migrations live in the workspace-level `migrations/` directory and are
/// embedded into the binary at compile time. Each file is named
/// `{timestamp}_{name}.sql`; sqlx records applied versions in
/// `_sqlx_migrations`.
///
/// # Example
///
/// ```no_run
/// use quillpost_shared::db::pool::{create_pool, DatabaseConfig};
/// use quillpost_shared::db::migrations::run_migrations;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::{migrate::Migrator, postgres::PgPool};
use tracing::{info, warn};

/// Migrations embedded from `../migrations`
pub static MIGRATOR: Migrator = sqlx::migrate!("../migrations");

/// Applies every pending migration
///
/// Each migration runs in its own transaction; a failing one is rolled back
/// and its error returned.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!(
        available = MIGRATOR.iter().count(),
        "Starting database migrations"
    );

    match MIGRATOR.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
