//! Blog posts
//!
//! Timestamps are stored as unix seconds and surfaced as UTC datetimes.

use chrono::{DateTime, Utc};
use site_core::{CreatePost, Post, PostId};
use sqlx::SqlitePool;

use crate::error::{Result, StorageError};

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    body: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<PostRow> for Post {
    type Error = StorageError;

    fn try_from(row: PostRow) -> Result<Self> {
        Ok(Post {
            id: row.id,
            title: row.title,
            body: row.body,
            created_at: timestamp(row.created_at)?,
            updated_at: timestamp(row.updated_at)?,
        })
    }
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| StorageError::InvalidData(format!("timestamp out of range: {secs}")))
}

/// All posts, newest first
///
/// Posts created in the same second are ordered by id, highest first.
///
/// # Errors
///
/// Returns an error if the query fails
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>> {
    let rows = sqlx::query_as::<_, PostRow>(
        "SELECT id, title, body, created_at, updated_at FROM posts ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Post::try_from).collect()
}

/// Get a post by id
///
/// # Errors
///
/// Returns an error if the query fails
pub async fn get_post(pool: &SqlitePool, id: PostId) -> Result<Option<Post>> {
    let row = sqlx::query_as::<_, PostRow>(
        "SELECT id, title, body, created_at, updated_at FROM posts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Post::try_from).transpose()
}

/// Create a post stamped with the current time
///
/// # Errors
///
/// Returns an error if the insert fails
pub async fn create_post(pool: &SqlitePool, input: &CreatePost) -> Result<Post> {
    create_post_at(pool, input, Utc::now()).await
}

/// Create a post stamped with `now`
///
/// # Errors
///
/// Returns an error if the insert fails
pub async fn create_post_at(
    pool: &SqlitePool,
    input: &CreatePost,
    now: DateTime<Utc>,
) -> Result<Post> {
    let row = sqlx::query_as::<_, PostRow>(
        "INSERT INTO posts (title, body, created_at, updated_at) VALUES (?, ?, ?, ?)
         RETURNING id, title, body, created_at, updated_at",
    )
    .bind(&input.title)
    .bind(&input.body)
    .bind(now.timestamp())
    .bind(now.timestamp())
    .fetch_one(pool)
    .await?;

    tracing::debug!(id = row.id, "Created post");
    Post::try_from(row)
}

/// Number of stored posts
///
/// # Errors
///
/// Returns an error if the query fails
pub async fn count_posts(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
