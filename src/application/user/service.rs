use super::dto::RegisterUserRequest;
use crate::application::shared::dto::UserResponse;
use crate::domain::{
    shared::errors::DomainError,
    user::{
        credentials::{CredentialsProvider, UserCredentials},
        entity::{DEFAULT_ROLE, NewUser, User},
        repository::UserRepository,
    },
};
use crate::infrastructure::security::password::PasswordHasher;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Hashes the password and stores the user.
    ///
    /// The returned `User` carries the generated id and the hashed password,
    /// never the plaintext from the request.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        if let Err(errors) = request.validate() {
            warn!("Rejected registration: {}", errors);
            return Err(errors.into());
        }

        let mut user = NewUser {
            username: request.username.trim().to_string(),
            email: request.email.trim().to_string(),
            password: request.password,
            roles: vec![DEFAULT_ROLE.to_string()],
        };
        user.password = self.hasher.hash(&user.password)?;

        let stored = self.repository.create(&user).await?;
        info!("Registered user {} ({})", stored.id, stored.username);
        Ok(stored)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.repository.find_by_username(username).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.repository.find_by_email(email).await
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<UserResponse, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|user| UserResponse::from(&user))
            .ok_or_else(|| DomainError::NotFound(format!("User with id = {} not found", id)))
    }
}

#[async_trait]
impl CredentialsProvider for UserService {
    async fn load_credentials(&self, username: &str) -> Result<UserCredentials, DomainError> {
        self.repository
            .find_by_username(username)
            .await?
            .map(UserCredentials::from)
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))
    }
}
