use crate::domain::shared::errors::DomainError;
use tracing::error;

/// One-way hashing of plaintext passwords at registration.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;
}

#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            error!("Password hashing failed: {}", e);
            DomainError::InfrastructureError(format!("Password hashing failed: {}", e))
        })
    }
}
