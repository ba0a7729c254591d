//! Site Storage
//!
//! `SQLite` database layer for the site's blog.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each feature owns its own queries and logic
//! - **Embedded Migrations**: The schema ships inside the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use site_core::CreatePost;
//! use site_storage::{create_pool, posts, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://site.db").await?;
//! run_migrations(&pool).await?;
//!
//! let input = CreatePost {
//!     title: "Hello".to_string(),
//!     body: "First post".to_string(),
//! };
//! posts::create_post(&pool, &input).await?;
//!
//! let all = posts::list_posts(&pool).await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod posts;

pub use error::{Result, StorageError};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://site.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating database pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
