use super::errors::DomainError;

/// Returns the trimmed-non-empty value, or a validation error carrying `message`.
pub fn require_text<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, DomainError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(DomainError::ValidationError(message.to_string())),
    }
}

pub fn require_id(value: Option<i64>, message: &str) -> Result<i64, DomainError> {
    value.ok_or_else(|| DomainError::ValidationError(message.to_string()))
}
