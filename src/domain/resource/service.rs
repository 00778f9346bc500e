use super::error::ResourceServiceError;
use super::{
    AddTagRequest, CreateResourceRequest, RateResourceRequest, Resource, ResourceResponse,
    UpdateResourceRequest,
};
use crate::infrastructure::repositories::{CategoryRepository, ResourceRepository, TagRepository};
use std::sync::Arc;

const MIN_LEVEL: i32 = 1;
const MAX_LEVEL: i32 = 5;

pub struct ResourceService {
    resource_repo: Arc<ResourceRepository>,
    category_repo: Arc<CategoryRepository>,
    tag_repo: Arc<TagRepository>,
}

impl ResourceService {
    pub fn new(
        resource_repo: Arc<ResourceRepository>,
        category_repo: Arc<CategoryRepository>,
        tag_repo: Arc<TagRepository>,
    ) -> Self {
        Self {
            resource_repo,
            category_repo,
            tag_repo,
        }
    }

    pub async fn create_resource(
        &self,
        request: CreateResourceRequest,
    ) -> Result<ResourceResponse, ResourceServiceError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ResourceServiceError::Invalid(
                "Resource name cannot be empty".to_string(),
            ));
        }
        validate_link(&request.link)?;
        validate_level(request.difficulty_level, "difficulty level")?;
        if request.category_ids.is_empty() {
            return Err(ResourceServiceError::Invalid(
                "A resource must belong to at least one category".to_string(),
            ));
        }

        for category_id in &request.category_ids {
            self.verify_category_exists(*category_id).await?;
        }

        let resource = self
            .resource_repo
            .create(
                name,
                &request.link,
                request.description.trim(),
                request.difficulty_level,
                request.owner.as_deref(),
            )
            .await
            .map_err(ResourceServiceError::from)?;

        for category_id in &request.category_ids {
            self.resource_repo
                .link_category(resource.id, *category_id)
                .await
                .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?;
        }

        for tag in &request.tags {
            let tag = tag.trim();
            if !tag.is_empty() {
                self.tag_repo
                    .add_tag(resource.id, tag)
                    .await
                    .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?;
            }
        }

        tracing::info!(
            resource_id = resource.id,
            name = %resource.name,
            categories = request.category_ids.len(),
            "Resource created"
        );

        Ok(ResourceResponse::from(resource))
    }

    pub async fn get_resource(
        &self,
        resource_id: i64,
    ) -> Result<ResourceResponse, ResourceServiceError> {
        let resource = self.find_resource(resource_id).await?;
        Ok(ResourceResponse::from(resource))
    }

    pub async fn list_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<ResourceResponse>, ResourceServiceError> {
        self.verify_category_exists(category_id).await?;

        let resources = self
            .resource_repo
            .find_by_category(category_id)
            .await
            .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?;
        Ok(resources.into_iter().map(ResourceResponse::from).collect())
    }

    pub async fn update_resource(
        &self,
        resource_id: i64,
        request: UpdateResourceRequest,
    ) -> Result<ResourceResponse, ResourceServiceError> {
        let mut resource = self.find_resource(resource_id).await?;

        if let Some(name) = request.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ResourceServiceError::Invalid(
                    "Resource name cannot be empty".to_string(),
                ));
            }
            resource.name = name;
        }
        if let Some(link) = request.link {
            validate_link(&link)?;
            resource.link = link;
        }
        if let Some(description) = request.description {
            resource.description = description.trim().to_string();
        }
        if let Some(difficulty_level) = request.difficulty_level {
            validate_level(difficulty_level, "difficulty level")?;
            resource.difficulty_level = difficulty_level;
        }

        self.resource_repo
            .update(&resource)
            .await
            .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?;

        Ok(ResourceResponse::from(resource))
    }

    pub async fn delete_resource(&self, resource_id: i64) -> Result<(), ResourceServiceError> {
        let deleted = self
            .resource_repo
            .delete(resource_id)
            .await
            .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?;

        if !deleted {
            return Err(ResourceServiceError::NotFound);
        }

        Ok(())
    }

    pub async fn rate_resource(
        &self,
        resource_id: i64,
        request: RateResourceRequest,
    ) -> Result<(), ResourceServiceError> {
        if request.rater_id.trim().is_empty() {
            return Err(ResourceServiceError::Invalid(
                "Rater id cannot be empty".to_string(),
            ));
        }
        validate_level(request.rating, "rating")?;

        self.find_resource(resource_id).await?;

        self.resource_repo
            .upsert_rating(resource_id, request.rater_id.trim(), request.rating)
            .await
            .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?;

        tracing::info!(
            resource_id = resource_id,
            rating = request.rating,
            "Resource rated"
        );

        Ok(())
    }

    pub async fn tags_for_resource(
        &self,
        resource_id: i64,
    ) -> Result<Vec<String>, ResourceServiceError> {
        self.find_resource(resource_id).await?;

        self.tag_repo
            .tags_for_resource(resource_id)
            .await
            .map_err(|e| ResourceServiceError::Dependency(e.to_string()))
    }

    pub async fn add_tag(
        &self,
        resource_id: i64,
        request: AddTagRequest,
    ) -> Result<(), ResourceServiceError> {
        let tag = request.tag.trim();
        if tag.is_empty() {
            return Err(ResourceServiceError::Invalid(
                "Tag cannot be empty".to_string(),
            ));
        }

        self.find_resource(resource_id).await?;

        // Duplicate tags are ignored at the repository level
        self.tag_repo
            .add_tag(resource_id, tag)
            .await
            .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?;

        Ok(())
    }

    pub async fn remove_tag(
        &self,
        resource_id: i64,
        tag: &str,
    ) -> Result<(), ResourceServiceError> {
        self.find_resource(resource_id).await?;

        let removed = self
            .tag_repo
            .remove_tag(resource_id, tag)
            .await
            .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?;

        if !removed {
            return Err(ResourceServiceError::Invalid(format!(
                "Tag '{}' is not attached to this resource",
                tag
            )));
        }

        Ok(())
    }
}

impl ResourceService {
    async fn find_resource(&self, resource_id: i64) -> Result<Resource, ResourceServiceError> {
        self.resource_repo
            .find_by_id(resource_id)
            .await
            .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?
            .ok_or(ResourceServiceError::NotFound)
    }

    async fn verify_category_exists(&self, category_id: i64) -> Result<(), ResourceServiceError> {
        let exists = self
            .category_repo
            .exists(category_id)
            .await
            .map_err(|e| ResourceServiceError::Dependency(e.to_string()))?;

        if !exists {
            return Err(ResourceServiceError::Invalid(format!(
                "Category {} does not exist",
                category_id
            )));
        }

        Ok(())
    }
}

fn validate_link(link: &str) -> Result<(), ResourceServiceError> {
    if !link.starts_with("http://") && !link.starts_with("https://") {
        return Err(ResourceServiceError::Invalid(
            "Invalid link format".to_string(),
        ));
    }
    Ok(())
}

fn validate_level(level: i32, field: &str) -> Result<(), ResourceServiceError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(ResourceServiceError::Invalid(format!(
            "The {} must be between {} and {}",
            field, MIN_LEVEL, MAX_LEVEL
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_link_accepts_http_and_https() {
        assert!(validate_link("http://example.com/course").is_ok());
        assert!(validate_link("https://example.com/course").is_ok());
    }

    #[test]
    fn test_validate_link_rejects_other_schemes() {
        assert!(validate_link("ftp://example.com").is_err());
        assert!(validate_link("example.com").is_err());
        assert!(validate_link("").is_err());
    }

    #[test]
    fn test_validate_level_bounds() {
        assert!(validate_level(1, "rating").is_ok());
        assert!(validate_level(5, "rating").is_ok());
        assert!(validate_level(0, "rating").is_err());
        assert!(validate_level(6, "rating").is_err());
        assert!(validate_level(-3, "rating").is_err());
    }
}
