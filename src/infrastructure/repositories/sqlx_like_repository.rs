use crate::domain::{
    like::{
        entity::{Like, LikeRemoval},
        repository::LikeRepository,
    },
    shared::errors::DomainError,
    user::entity::User,
};
use crate::infrastructure::database::errors::map_db_error;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info, instrument};

#[derive(FromRow)]
struct LikeRow {
    id: i64,
    post_id: i64,
    user_id: i64,
    username: String,
    email: String,
    password: String,
    roles: Vec<String>,
}

impl From<LikeRow> for Like {
    fn from(r: LikeRow) -> Self {
        Like {
            id: r.id,
            post_id: r.post_id,
            user: User {
                id: r.user_id,
                username: r.username,
                email: r.email,
                password: r.password,
                roles: r.roles,
            },
        }
    }
}

pub struct SqlxLikeRepository {
    pub pool: PgPool,
}

impl SqlxLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for SqlxLikeRepository {
    async fn exists_by_post_and_user(
        &self,
        post_id: i64,
        user_id: i64,
    ) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE post_id = $1 AND user_id = $2)",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Checking like", e))
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn create(&self, post_id: i64, user: User) -> Result<Like, DomainError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO likes (user_id, post_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(user.id)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Creating like", e))?;

        info!("Inserted like {}", id);
        Ok(Like { id, user, post_id })
    }

    #[instrument(skip(self))]
    async fn remove(&self, post_id: i64, user_id: i64) -> Result<LikeRemoval, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("Starting like removal", e))?;

        let user = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = $1 FOR SHARE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_db_error("Resolving user", e))?;
        if user.is_none() {
            return Ok(LikeRemoval::UserNotFound);
        }

        let post = sqlx::query_scalar::<_, i64>("SELECT id FROM posts WHERE id = $1 FOR SHARE")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_db_error("Resolving post", e))?;
        if post.is_none() {
            return Ok(LikeRemoval::PostNotFound);
        }

        let like_ids = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM likes WHERE post_id = $1 AND user_id = $2 FOR UPDATE",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| map_db_error("Checking like", e))?;
        if like_ids.is_empty() {
            return Ok(LikeRemoval::NotLiked);
        }

        sqlx::query("DELETE FROM likes WHERE id = ANY($1)")
            .bind(&like_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("Deleting like", e))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error("Committing like removal", e))?;
        debug!("Removed likes {:?}", like_ids);
        Ok(LikeRemoval::Removed)
    }

    async fn count_by_post(&self, post_id: i64) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Counting likes", e))
    }

    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Like>, DomainError> {
        let rows = sqlx::query_as::<_, LikeRow>(
            "SELECT l.id, l.post_id, u.id AS user_id, u.username, u.email, u.password, u.roles
             FROM likes l
             JOIN users u ON u.id = l.user_id
             WHERE l.post_id = $1
             ORDER BY l.id",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Listing likes", e))?;
        Ok(rows.into_iter().map(Like::from).collect())
    }
}
