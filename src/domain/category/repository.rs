use super::entity::Category;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;
    async fn create(&self, name: &str) -> Result<Category, DomainError>;
}
