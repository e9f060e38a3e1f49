use crate::domain::{
    comment::{
        entity::{Comment, NewComment},
        repository::CommentRepository,
    },
    shared::errors::DomainError,
    user::entity::User,
};
use crate::infrastructure::database::errors::map_db_error;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info, instrument};

const COMMENT_SELECT: &str = "SELECT cm.id, cm.content, cm.post_id, \
        u.id AS author_id, u.username AS author_username, u.email AS author_email, \
        u.password AS author_password, u.roles AS author_roles \
     FROM comments cm \
     JOIN users u ON u.id = cm.author_id";

#[derive(FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    post_id: i64,
    author_id: i64,
    author_username: String,
    author_email: String,
    author_password: String,
    author_roles: Vec<String>,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Comment {
            id: r.id,
            content: r.content,
            post_id: r.post_id,
            author: User {
                id: r.author_id,
                username: r.author_username,
                email: r.author_email,
                password: r.author_password,
                roles: r.author_roles,
            },
        }
    }
}

pub struct SqlxCommentRepository {
    pub pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        let sql = format!("{} WHERE cm.id = $1", COMMENT_SELECT);
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Loading comment", e))?;
        Ok(row.map(Comment::from))
    }

    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        let sql = format!("{} WHERE cm.post_id = $1 ORDER BY cm.id", COMMENT_SELECT);
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(post_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Listing comments", e))?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(post_id = comment.post_id, author_id = comment.author.id))]
    async fn create(&self, comment: NewComment) -> Result<Comment, DomainError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO comments (content, author_id, post_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&comment.content)
        .bind(comment.author.id)
        .bind(comment.post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Creating comment", e))?;

        info!("Inserted comment {}", id);
        Ok(Comment {
            id,
            content: comment.content,
            author: comment.author,
            post_id: comment.post_id,
        })
    }

    #[instrument(skip(self, comment), fields(comment_id = comment.id))]
    async fn update(&self, comment: Comment) -> Result<Option<Comment>, DomainError> {
        let result = sqlx::query(
            "UPDATE comments SET content = $2, author_id = $3, post_id = $4 WHERE id = $1",
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(comment.author.id)
        .bind(comment.post_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("Updating comment", e))?;

        if result.rows_affected() == 0 {
            debug!("Comment {} no longer exists", comment.id);
            return Ok(None);
        }
        Ok(Some(comment))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Deleting comment", e))?;
        Ok(())
    }
}
