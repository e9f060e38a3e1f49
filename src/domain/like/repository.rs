use super::entity::{Like, LikeRemoval};
use crate::domain::{shared::errors::DomainError, user::entity::User};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn exists_by_post_and_user(&self, post_id: i64, user_id: i64)
    -> Result<bool, DomainError>;
    async fn create(&self, post_id: i64, user: User) -> Result<Like, DomainError>;
    /// Resolves user and post, checks for the like and deletes it, all inside one transaction.
    async fn remove(&self, post_id: i64, user_id: i64) -> Result<LikeRemoval, DomainError>;
    async fn count_by_post(&self, post_id: i64) -> Result<i64, DomainError>;
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Like>, DomainError>;
}
