/// Database layer for Quillpost
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool shared by all requests
/// - `migrations`: Embedded migration runner
/// - `errors`: Classification of driver errors into storage failure kinds
///
/// Models live in the `models` module at crate root level.
///
/// # Example
///
/// ```no_run
/// use quillpost_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod errors;
pub mod migrations;
pub mod pool;
