use super::entity::{NewPost, Post};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Post>, DomainError>;
    async fn find_by_category_name(&self, category_name: &str) -> Result<Vec<Post>, DomainError>;
    async fn find_by_author_username(&self, username: &str) -> Result<Vec<Post>, DomainError>;
    async fn find_by_category_name_and_author_username(
        &self,
        category_name: &str,
        username: &str,
    ) -> Result<Vec<Post>, DomainError>;
    async fn create(&self, post: NewPost) -> Result<Post, DomainError>;
    /// Writes every column of an existing row. `None` when the row is gone.
    async fn update(&self, post: Post) -> Result<Option<Post>, DomainError>;
    /// Removes the post with its comments and likes in one transaction.
    /// Deleting an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}
