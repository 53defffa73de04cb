/// Blog post model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE blogs (
///     id BIGSERIAL PRIMARY KEY,
///     title VARCHAR(200) NOT NULL,
///     content TEXT NOT NULL,
///     author_id BIGINT NOT NULL REFERENCES users(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Writes that depend on a prior read (author exists, caller owns the post)
/// are meant to run inside one transaction:
///
/// ```no_run
/// use quillpost_shared::models::blog::{Blog, UpdateBlog};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool, user_id: i64) -> Result<(), sqlx::Error> {
/// let mut tx = pool.begin().await?;
///
/// if Blog::find_owned_for_update(&mut *tx, 10, user_id).await?.is_some() {
///     Blog::update(&mut *tx, 10, UpdateBlog {
///         title: "New title".to_string(),
///         content: "<p>New body</p>".to_string(),
///     })
///     .await?;
/// }
///
/// tx.commit().await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgExecutor;

/// Blog post row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Blog {
    /// Unique post ID
    pub id: i64,

    /// Plain-text title
    pub title: String,

    /// Sanitized rich-text body
    pub content: String,

    /// Owning user
    pub author_id: i64,

    /// When the post was created
    pub created_at: DateTime<Utc>,

    /// When the post was last edited
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a post
#[derive(Debug, Clone)]
pub struct CreateBlog {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

/// Replacement title and content for an existing post
#[derive(Debug, Clone)]
pub struct UpdateBlog {
    pub title: String,
    pub content: String,
}

/// Author as exposed alongside a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name
    pub name: String,
}

/// Post as returned by the read endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: Author,
}

#[derive(sqlx::FromRow)]
struct BlogWithAuthorRow {
    id: i64,
    title: String,
    content: String,
    author_name: String,
}

impl From<BlogWithAuthorRow> for BlogView {
    fn from(row: BlogWithAuthorRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author: Author {
                name: row.author_name,
            },
        }
    }
}

impl Blog {
    /// Inserts a post
    ///
    /// # Errors
    ///
    /// A missing author surfaces as a foreign key violation.
    pub async fn create<'e, E>(executor: E, data: CreateBlog) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.author_id)
        .fetch_one(executor)
        .await
    }

    /// Finds a post by ID only if `author_id` owns it, locking the row
    ///
    /// The `FOR UPDATE` lock holds until the surrounding transaction ends, so
    /// a concurrent writer to the same post waits instead of interleaving.
    /// Missing and not-owned posts both return `None`.
    pub async fn find_owned_for_update<'e, E>(
        executor: E,
        id: i64,
        author_id: i64,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM blogs
            WHERE id = $1 AND author_id = $2
            FOR UPDATE
            "#,
        )
        .bind(id)
        .bind(author_id)
        .fetch_optional(executor)
        .await
    }

    /// Replaces title and content
    ///
    /// # Errors
    ///
    /// `sqlx::Error::RowNotFound` if the post does not exist.
    pub async fn update<'e, E>(executor: E, id: i64, data: UpdateBlog) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs
            SET title = $2, content = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, author_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.content)
        .fetch_one(executor)
        .await
    }

    /// Finds a post by ID
    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Lists every post with its author's name, oldest first
    pub async fn list_with_authors<'e, E>(executor: E) -> Result<Vec<BlogView>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let rows = sqlx::query_as::<_, BlogWithAuthorRow>(
            r#"
            SELECT b.id, b.title, b.content, u.name AS author_name
            FROM blogs b
            JOIN users u ON u.id = b.author_id
            ORDER BY b.id ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(BlogView::from).collect())
    }

    /// Fetches one post with its author's name
    pub async fn find_with_author<'e, E>(
        executor: E,
        id: i64,
    ) -> Result<Option<BlogView>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row = sqlx::query_as::<_, BlogWithAuthorRow>(
            r#"
            SELECT b.id, b.title, b.content, u.name AS author_name
            FROM blogs b
            JOIN users u ON u.id = b.author_id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(BlogView::from))
    }

    /// Counts posts owned by a user
    pub async fn count_by_author<'e, E>(executor: E, author_id: i64) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blogs WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
