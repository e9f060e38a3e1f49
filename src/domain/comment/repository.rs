use super::entity::{Comment, NewComment};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError>;
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError>;
    async fn create(&self, comment: NewComment) -> Result<Comment, DomainError>;
    /// Writes every column of an existing row. `None` when the row is gone.
    async fn update(&self, comment: Comment) -> Result<Option<Comment>, DomainError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}
