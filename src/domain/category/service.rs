use super::error::CategoryServiceError;
use super::{Category, CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::infrastructure::repositories::CategoryRepository;
use std::sync::Arc;

pub struct CategoryService {
    category_repo: Arc<CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryResponse>, CategoryServiceError> {
        let categories = self
            .category_repo
            .find_all()
            .await
            .map_err(|e| CategoryServiceError::Dependency(e.to_string()))?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    pub async fn get_category(&self, category_id: i64) -> Result<CategoryResponse, CategoryServiceError> {
        let category = self.find_category(category_id).await?;
        Ok(CategoryResponse::from(category))
    }

    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<CategoryResponse, CategoryServiceError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(CategoryServiceError::Invalid(
                "Category name cannot be empty".to_string(),
            ));
        }

        let category = self
            .category_repo
            .create(name, request.description.trim())
            .await
            .map_err(CategoryServiceError::from)?;

        tracing::info!(category_id = category.id, name = %category.name, "Category created");

        Ok(CategoryResponse::from(category))
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        request: UpdateCategoryRequest,
    ) -> Result<CategoryResponse, CategoryServiceError> {
        let mut category = self.find_category(category_id).await?;

        if let Some(name) = request.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CategoryServiceError::Invalid(
                    "Category name cannot be empty".to_string(),
                ));
            }
            category.name = name;
        }
        if let Some(description) = request.description {
            category.description = description.trim().to_string();
        }

        self.category_repo
            .update(&category)
            .await
            .map_err(CategoryServiceError::from)?;

        Ok(CategoryResponse::from(category))
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<(), CategoryServiceError> {
        let deleted = self
            .category_repo
            .delete(category_id)
            .await
            .map_err(|e| CategoryServiceError::Dependency(e.to_string()))?;

        if !deleted {
            return Err(CategoryServiceError::NotFound);
        }

        Ok(())
    }
}

impl CategoryService {
    async fn find_category(&self, category_id: i64) -> Result<Category, CategoryServiceError> {
        self.category_repo
            .find_by_id(category_id)
            .await
            .map_err(|e| CategoryServiceError::Dependency(e.to_string()))?
            .ok_or(CategoryServiceError::NotFound)
    }
}
