/// Database models for Quillpost
///
/// # Models
///
/// - `user`: Accounts with hashed credentials
/// - `blog`: Posts, each owned by one user
///
/// # Example
///
/// ```no_run
/// use quillpost_shared::models::blog::{Blog, CreateBlog};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let blog = Blog::create(&pool, CreateBlog {
///     title: "First post".to_string(),
///     content: "<p>Hello</p>".to_string(),
///     author_id: 1,
/// })
/// .await?;
///
/// let view = Blog::find_with_author(&pool, blog.id).await?;
/// # Ok(())
/// # }
/// ```

pub mod blog;
pub mod user;
