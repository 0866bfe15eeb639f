use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::data::post_repository::{Pagination, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    image: Option<String>,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_posts(&self, pagination: Pagination) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                image,
                content,
                created_at,
                updated_at
            FROM posts
            ORDER BY id ASC
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        rows.into_iter().map(map_row_to_post).collect()
    }
}

fn map_row_to_post(row: PostRow) -> Result<Post, DomainError> {
    Post::new(
        row.id,
        row.title,
        row.image,
        row.content,
        row.created_at,
        row.updated_at,
    )
    .map_err(|err| DomainError::Internal(format!("invalid post row: {err}")))
}

fn map_post_db_error(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => DomainError::Unavailable(err.to_string()),
        // SQLSTATE class 08: connection exception
        sqlx::Error::Database(db_err)
            if db_err.code().is_some_and(|code| code.starts_with("08")) =>
        {
            DomainError::Unavailable(err.to_string())
        }
        _ => DomainError::Internal(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{PostRow, map_post_db_error, map_row_to_post};
    use crate::domain::error::DomainError;

    #[test]
    fn null_image_maps_to_post_without_image() {
        let now = Utc::now();
        let post = map_row_to_post(PostRow {
            id: 1,
            title: "Hello".to_string(),
            image: None,
            content: String::new(),
            created_at: now,
            updated_at: now,
        })
        .expect("row must map");

        assert_eq!(post.image, None);
        assert_eq!(post.image_or_empty(), "");
    }

    #[test]
    fn padded_title_passes_through_unchanged() {
        let now = Utc::now();
        let post = map_row_to_post(PostRow {
            id: 3,
            title: "  Hello  ".to_string(),
            image: Some("/x.jpg".to_string()),
            content: "body".to_string(),
            created_at: now,
            updated_at: now,
        })
        .expect("row must map");

        assert_eq!(post.title, "  Hello  ");
        assert_eq!(post.content, "body");
    }

    #[test]
    fn broken_row_maps_to_internal_error() {
        let now = Utc::now();
        let err = map_row_to_post(PostRow {
            id: 0,
            title: "Hello".to_string(),
            image: None,
            content: String::new(),
            created_at: now,
            updated_at: now,
        })
        .expect_err("id 0 must be rejected");

        assert!(matches!(err, DomainError::Internal(msg) if msg.contains("invalid post row")));
    }

    #[test]
    fn pool_errors_are_unavailable() {
        assert!(matches!(
            map_post_db_error(sqlx::Error::PoolTimedOut),
            DomainError::Unavailable(_)
        ));
        assert!(matches!(
            map_post_db_error(sqlx::Error::PoolClosed),
            DomainError::Unavailable(_)
        ));
    }

    #[test]
    fn io_errors_are_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = map_post_db_error(sqlx::Error::Io(io));
        assert!(matches!(err, DomainError::Unavailable(msg) if msg.contains("connection refused")));
    }

    #[test]
    fn query_errors_are_internal() {
        let err = map_post_db_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    #[ignore = "requires running PostgreSQL (BLOG_SERVICE_DB_STRING) with migrations applied"]
    async fn lists_posts_from_database() {
        use crate::data::post_repository::{Pagination, PostRepository};

        let url = std::env::var("BLOG_SERVICE_DB_STRING").expect("BLOG_SERVICE_DB_STRING must be set");
        let pool = sqlx::PgPool::connect(&url).await.expect("database must be reachable");
        let repo = super::PostgresPostRepository::new(pool);

        let posts = repo
            .list_posts(Pagination {
                page: 1,
                page_size: 100,
            })
            .await
            .expect("list_posts must succeed");

        assert!(posts.windows(2).all(|pair| pair[0].id < pair[1].id));
    }
}
