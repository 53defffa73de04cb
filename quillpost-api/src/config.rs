/// Configuration management for the API server
///
/// Configuration is read once at startup, wrapped in an `Arc` inside
/// `AppState` and never modified afterwards. There is no hot reload.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `RUN_MIGRATIONS`: Apply pending migrations at startup (default: true)
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `CORS_ORIGINS`: Comma-separated allowed origins, `*` for any (default: *)
/// - `JWT_SECRET`: Secret key for token signing (required, at least 32 chars)
/// - `JWT_EXPIRATION_HOURS`: Token lifetime, 1 to 8760 (default: 24)
/// - `RUST_LOG`: Log filter (default: quillpost_api=debug,tower_http=debug)
/// - `LOG_FORMAT`: `json` for structured logs, anything else for text
///
/// # Example
///
/// ```no_run
/// use quillpost_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use chrono::Duration;
use quillpost_shared::{auth::jwt::DEFAULT_EXPIRATION_HOURS, db::pool::DatabaseConfig as PoolConfig};
use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub jwt: JwtConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Origins allowed by CORS (`*` means any)
    pub cors_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,

    /// Whether to apply migrations on startup
    pub run_migrations: bool,
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for JWT signing
    ///
    /// Must be at least 32 bytes. Generate with: `openssl rand -hex 32`
    #[serde(skip_serializing)]
    pub secret: String,

    /// Lifetime of issued tokens in hours
    pub expiration_hours: i64,
}

/// Longest accepted token lifetime (one year)
pub const MAX_EXPIRATION_HOURS: i64 = 8760;

impl JwtConfig {
    /// Token lifetime as a duration
    ///
    /// Saturates for values no duration can hold; issuing a token with such a
    /// lifetime then fails instead of panicking.
    pub fn expiration(&self) -> Duration {
        Duration::try_hours(self.expiration_hours).unwrap_or(Duration::MAX)
    }
}

/// Parses `JWT_EXPIRATION_HOURS`, falling back to the default when unset
fn parse_expiration_hours(value: Option<String>) -> anyhow::Result<i64> {
    let hours = match value {
        Some(value) => value.trim().parse::<i64>()?,
        None => DEFAULT_EXPIRATION_HOURS,
    };

    if hours <= 0 {
        anyhow::bail!("JWT_EXPIRATION_HOURS must be positive");
    }

    if hours > MAX_EXPIRATION_HOURS {
        anyhow::bail!(
            "JWT_EXPIRATION_HOURS must be at most {} (one year)",
            MAX_EXPIRATION_HOURS
        );
    }

    Ok(hours)
}

impl DatabaseConfig {
    /// Pool settings derived from this configuration
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            url: self.url.clone(),
            max_connections: self.max_connections,
            ..Default::default()
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` or `JWT_SECRET` is missing
    /// - `JWT_SECRET` is shorter than 32 characters
    /// - A numeric variable does not parse
    /// - `JWT_EXPIRATION_HOURS` is not between 1 and [`MAX_EXPIRATION_HOURS`]
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()?;

        let run_migrations = env::var("RUN_MIGRATIONS")
            .map(|v| parse_bool(&v))
            .unwrap_or(true);

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable is required"))?;

        if jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 characters long");
        }

        let expiration_hours = parse_expiration_hours(env::var("JWT_EXPIRATION_HOURS").ok())?;

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                cors_origins,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                run_migrations,
            },
            jwt: JwtConfig {
                secret: jwt_secret,
                expiration_hours,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
