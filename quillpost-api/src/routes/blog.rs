/// Blog endpoints
///
/// Every route here sits behind the bearer-token layer, so handlers can rely
/// on an `AuthContext` extension being present.
///
/// - `POST /api/v1/blog` - Create a post owned by the caller
/// - `PUT /api/v1/blog` - Update a post the caller owns
/// - `GET /api/v1/blog/bulk` - List all posts
/// - `GET /api/v1/blog/:id` - Fetch one post
///
/// Writes follow the same pipeline: sanitize, validate (422 before touching
/// the store), then a single transaction for the read-then-write pair. An
/// early return drops the transaction, which rolls it back.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    validation::{sanitize_and_validate, BlogPayload, CreateBlogInput, UpdateBlogInput},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Extension, Json,
};
use quillpost_shared::{
    auth::middleware::AuthContext,
    models::{
        blog::{Blog, BlogView, CreateBlog, UpdateBlog},
        user::User,
    },
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Reported for a create whose token names a user that no longer exists
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Reported for an update of a missing post and of someone else's post alike
pub const NOT_FOUND_OR_UNAUTHORIZED: &str = "Blog not found or unauthorized";

/// `{ "id": n }`
#[derive(Debug, Serialize, Deserialize)]
pub struct BlogIdResponse {
    pub id: i64,
}

/// `{ "blogs": [...] }`
#[derive(Debug, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub blogs: Vec<BlogView>,
}

/// `{ "blog": {...} }`
#[derive(Debug, Serialize, Deserialize)]
pub struct BlogResponse {
    pub blog: BlogView,
}

/// Create a post
///
/// ```text
/// POST /api/v1/blog
/// Authorization: Bearer <token>
///
/// { "title": "Hello", "content": "<p>World</p>" }
/// ```
///
/// The author lookup and the insert share one transaction, so a post can
/// never be created for an author that is gone by the time of the insert.
///
/// # Errors
///
/// - `422`: Validation failed (checked before any store access)
/// - `403`: The token's user does not exist
/// - `409` / `400`: Store rejected the write
pub async fn create_blog(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Result<Json<BlogPayload>, JsonRejection>,
) -> ApiResult<Json<BlogIdResponse>> {
    let Json(payload) = payload?;
    let input: CreateBlogInput = sanitize_and_validate(&payload)?;

    let mut tx = state.db.begin().await.map_err(ApiError::from_write_error)?;

    if User::find_by_id(&mut *tx, auth.user_id)
        .await
        .map_err(ApiError::from_write_error)?
        .is_none()
    {
        debug!(user_id = auth.user_id, "Token references a missing user");
        return Err(ApiError::Forbidden(UNAUTHORIZED.to_string()));
    }

    let blog = Blog::create(
        &mut *tx,
        CreateBlog {
            title: input.title,
            content: input.content,
            author_id: auth.user_id,
        },
    )
    .await
    .map_err(ApiError::from_write_error)?;

    tx.commit().await.map_err(ApiError::from_write_error)?;

    info!(blog_id = blog.id, user_id = auth.user_id, "Blog created");

    Ok(Json(BlogIdResponse { id: blog.id }))
}

/// Update a post
///
/// ```text
/// PUT /api/v1/blog
/// Authorization: Bearer <token>
///
/// { "id": 1, "title": "Hello again", "content": "<p>Edited</p>" }
/// ```
///
/// The ownership check locks the row, so concurrent updates to the same post
/// apply one after the other.
///
/// # Errors
///
/// - `422`: Validation failed
/// - `403`: No post with this id is owned by the caller
/// - `400`: Store rejected the write
pub async fn update_blog(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Result<Json<BlogPayload>, JsonRejection>,
) -> ApiResult<Json<BlogIdResponse>> {
    let Json(payload) = payload?;
    let input: UpdateBlogInput = sanitize_and_validate(&payload)?;

    let mut tx = state.db.begin().await.map_err(ApiError::from_write_error)?;

    if Blog::find_owned_for_update(&mut *tx, input.id, auth.user_id)
        .await
        .map_err(ApiError::from_write_error)?
        .is_none()
    {
        return Err(ApiError::Forbidden(NOT_FOUND_OR_UNAUTHORIZED.to_string()));
    }

    let blog = Blog::update(
        &mut *tx,
        input.id,
        UpdateBlog {
            title: input.title,
            content: input.content,
        },
    )
    .await
    .map_err(ApiError::from_write_error)?;

    tx.commit().await.map_err(ApiError::from_write_error)?;

    info!(blog_id = blog.id, user_id = auth.user_id, "Blog updated");

    Ok(Json(BlogIdResponse { id: blog.id }))
}

/// List every post with its author's name, in creation order
///
/// # Errors
///
/// - `500`: Store failure
pub async fn list_blogs(State(state): State<AppState>) -> ApiResult<Json<BlogListResponse>> {
    let blogs = Blog::list_with_authors(&state.db).await?;

    Ok(Json(BlogListResponse { blogs }))
}

/// Fetch one post
///
/// # Errors
///
/// - `422`: The id is not an integer
/// - `404`: No such post
/// - `500`: Store failure
pub async fn get_blog(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<BlogResponse>> {
    let Path(id) = id?;

    let blog = Blog::find_with_author(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))?;

    Ok(Json(BlogResponse { blog }))
}
