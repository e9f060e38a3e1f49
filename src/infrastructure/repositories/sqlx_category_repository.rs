use crate::domain::{
    category::{entity::Category, repository::CategoryRepository},
    shared::errors::DomainError,
};
use crate::infrastructure::database::errors::map_db_error;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct SqlxCategoryRepository {
    pub pool: PgPool,
}

impl SqlxCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Loading category", e))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Loading category by name", e))
    }

    async fn create(&self, name: &str) -> Result<Category, DomainError> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Creating category", e))
    }
}
