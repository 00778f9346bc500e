use super::error::UserInterestServiceError;
use super::{SetInterestRequest, UserInterestResponse};
use crate::infrastructure::repositories::{CategoryRepository, UserInterestRepository};
use std::sync::Arc;

const MIN_LEVEL: i32 = 1;
const MAX_LEVEL: i32 = 5;

pub struct UserInterestService {
    interest_repo: Arc<UserInterestRepository>,
    category_repo: Arc<CategoryRepository>,
}

impl UserInterestService {
    pub fn new(
        interest_repo: Arc<UserInterestRepository>,
        category_repo: Arc<CategoryRepository>,
    ) -> Self {
        Self {
            interest_repo,
            category_repo,
        }
    }

    pub async fn interests_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserInterestResponse>, UserInterestServiceError> {
        let user_id = validated_user_id(user_id)?;

        let interests = self
            .interest_repo
            .find_by_user(user_id)
            .await
            .map_err(|e| UserInterestServiceError::Dependency(e.to_string()))?;
        Ok(interests
            .into_iter()
            .map(UserInterestResponse::from)
            .collect())
    }

    pub async fn set_interest(
        &self,
        user_id: &str,
        request: SetInterestRequest,
    ) -> Result<(), UserInterestServiceError> {
        let user_id = validated_user_id(user_id)?;
        validate_level(request.skill_level, "skill level")?;
        validate_level(request.interest_level, "interest level")?;

        let exists = self
            .category_repo
            .exists(request.category_id)
            .await
            .map_err(|e| UserInterestServiceError::Dependency(e.to_string()))?;
        if !exists {
            return Err(UserInterestServiceError::Invalid(format!(
                "Category {} does not exist",
                request.category_id
            )));
        }

        self.interest_repo
            .upsert(
                user_id,
                request.category_id,
                request.skill_level,
                request.interest_level,
            )
            .await
            .map_err(|e| UserInterestServiceError::Dependency(e.to_string()))?;

        tracing::info!(
            user_id = %user_id,
            category_id = request.category_id,
            interest_level = request.interest_level,
            "Interest declared"
        );

        Ok(())
    }

    pub async fn remove_interest(
        &self,
        user_id: &str,
        category_id: i64,
    ) -> Result<(), UserInterestServiceError> {
        let user_id = validated_user_id(user_id)?;

        let removed = self
            .interest_repo
            .delete(user_id, category_id)
            .await
            .map_err(|e| UserInterestServiceError::Dependency(e.to_string()))?;

        if !removed {
            return Err(UserInterestServiceError::NotFound);
        }

        Ok(())
    }
}

fn validated_user_id(user_id: &str) -> Result<&str, UserInterestServiceError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(UserInterestServiceError::Invalid(
            "User id cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

fn validate_level(level: i32, field: &str) -> Result<(), UserInterestServiceError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(UserInterestServiceError::Invalid(format!(
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
    fn test_validated_user_id_trims_whitespace() {
        assert_eq!(validated_user_id("  jdoe  ").unwrap(), "jdoe");
    }

    #[test]
    fn test_validated_user_id_rejects_blank() {
        assert!(validated_user_id("").is_err());
        assert!(validated_user_id("   ").is_err());
    }

    #[test]
    fn test_validate_level_bounds() {
        assert!(validate_level(1, "skill level").is_ok());
        assert!(validate_level(5, "skill level").is_ok());
        assert!(validate_level(0, "skill level").is_err());
        assert!(validate_level(6, "skill level").is_err());
    }
}
