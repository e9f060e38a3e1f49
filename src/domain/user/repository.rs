use super::entity::{NewUser, User};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    /// Inserts the user; a taken username or email is `DomainError::Conflict`.
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}
