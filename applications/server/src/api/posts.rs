/// Posts API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use site_core::{CreatePost, Post, PostId};
use site_storage::posts;

/// Message returned when a required field is missing or empty
pub const MISSING_FIELDS: &str = "Title and body are required.";

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// GET /api/posts
/// List all posts, newest first
pub async fn list_posts(State(app_state): State<AppState>) -> Result<Json<PostsResponse>> {
    let posts = posts::list_posts(&app_state.pool).await?;
    Ok(Json(PostsResponse { posts }))
}

/// POST /api/posts
/// Create a post from `{title, body}`
pub async fn create_post(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>)> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected post payload");
        ServerError::BadRequest(rejection.body_text())
    })?;

    let input = CreatePost::from_parts(req.title, req.body)
        .ok_or_else(|| ServerError::BadRequest(MISSING_FIELDS.to_string()))?;

    let post = posts::create_post(&app_state.pool, &input).await?;
    tracing::info!(id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts/:id
/// Get a single post
pub async fn get_post(
    State(app_state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<Post>> {
    let post = posts::get_post(&app_state.pool, id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Post {id} not found")))?;
    Ok(Json(post))
}
