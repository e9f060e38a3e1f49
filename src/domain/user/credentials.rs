use super::entity::User;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// Minimal view handed to an authentication layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub username: String,
    pub password_hash: String,
    pub authorities: Vec<String>,
}

impl From<User> for UserCredentials {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            password_hash: user.password,
            authorities: user.roles,
        }
    }
}

#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Fails with `DomainError::NotFound` when no user has this username.
    async fn load_credentials(&self, username: &str) -> Result<UserCredentials, DomainError>;
}
