use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "USER";

/// A registered account. `password` holds the bcrypt hash once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub roles: Vec<String>,
}

/// Registration payload on its way to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<String>,
}
