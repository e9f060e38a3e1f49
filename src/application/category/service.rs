use crate::application::shared::dto::CategoryResponse;
use crate::domain::{
    category::repository::CategoryRepository,
    shared::{errors::DomainError, validation::require_text},
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Categories are not created by posts; this is the out-of-band path used by the bootstrap.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Returns the category with this name, creating it first if needed.
    #[instrument(skip(self))]
    pub async fn ensure_category(&self, name: &str) -> Result<CategoryResponse, DomainError> {
        let name = require_text(Some(name), "Category name is required")?.trim();
        if let Some(existing) = self.repository.find_by_name(name).await? {
            debug!("Category '{}' already exists as {}", name, existing.id);
            return Ok(CategoryResponse::from(&existing));
        }
        let created = self.repository.create(name).await?;
        info!("Created category {} '{}'", created.id, created.name);
        Ok(CategoryResponse::from(&created))
    }

    pub async fn get_category_by_id(&self, id: i64) -> Result<CategoryResponse, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|category| CategoryResponse::from(&category))
            .ok_or_else(|| DomainError::NotFound(format!("Category with id = {} not found", id)))
    }
}
