use crate::domain::{
    shared::errors::DomainError,
    user::{
        entity::{NewUser, User},
        repository::UserRepository,
    },
};
use crate::infrastructure::database::errors::map_db_error;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, roles FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Loading user", e))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, roles FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Loading user by username", e))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, roles FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Loading user by email", e))
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let stored = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password, roles) VALUES ($1, $2, $3, $4)
             RETURNING id, username, email, password, roles",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.roles)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match map_db_error("Registering user", e) {
            DomainError::Conflict(_) => {
                DomainError::Conflict("Username or email already registered".to_string())
            }
            other => other,
        })?;

        info!("Stored user {}", stored.id);
        Ok(stored)
    }
}
