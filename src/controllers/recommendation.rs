use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::recommendation::{
        RecommendationService, RecommendationServiceApi, ResourceCandidate,
    },
    error::{AppError, AppResult},
};

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default, rename = "minRating")]
    pub min_rating: f64,
    #[serde(default, rename = "minRatingCount")]
    pub min_rating_count: i64,
    /// Comma-separated category ids; absent means "all declared interests"
    #[serde(default)]
    pub categories: Option<String>,
}

pub struct RecommendationController {
    recommendation_service: Arc<RecommendationService>,
}

impl RecommendationController {
    pub fn new(recommendation_service: Arc<RecommendationService>) -> Self {
        Self {
            recommendation_service,
        }
    }

    /// GET /api/users/{userId}/recommendations - Personalized resource list
    pub async fn get_recommendations(
        State(controller): State<Arc<RecommendationController>>,
        Path(user_id): Path<String>,
        Query(query): Query<RecommendationQuery>,
    ) -> AppResult<Json<Vec<ResourceCandidate>>> {
        let recommendations = match query.categories {
            None => {
                controller
                    .recommendation_service
                    .get_recommended_resources(&user_id, query.min_rating, query.min_rating_count)
                    .await?
            }
            Some(raw) => {
                let category_ids = parse_category_ids(&raw)?;
                controller
                    .recommendation_service
                    .get_recommended_resources_in_categories(
                        &user_id,
                        Some(&category_ids),
                        query.min_rating,
                        query.min_rating_count,
                    )
                    .await?
            }
        };

        Ok(Json(recommendations))
    }
}

/// Parses "1,4,9" into category ids. An empty parameter yields an empty
/// list, which the service rejects with its own fixed message.
fn parse_category_ids(raw: &str) -> AppResult<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("Invalid category id: {}", part)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_ids_accepts_comma_separated_values() {
        assert_eq!(parse_category_ids("1,4,9").unwrap(), vec![1, 4, 9]);
        assert_eq!(parse_category_ids(" 1 , 4 ").unwrap(), vec![1, 4]);
    }

    #[test]
    fn test_parse_category_ids_of_empty_parameter_is_empty() {
        assert!(parse_category_ids("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_category_ids_rejects_garbage() {
        assert!(parse_category_ids("1,foo").is_err());
    }
}
