pub mod error;
pub mod messages;
pub mod pipeline;
pub mod service;

pub use error::RecommendationError;
pub use service::{RecommendationService, RecommendationServiceApi, MAX_RESULTS};

use crate::domain::user_interest::UserCategoryInterest;
use crate::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A resource eligible for recommendation, as produced by the candidate
/// fetcher: already filtered by minimum average rating and minimum rating
/// count, pre-ranked within its category, and stamped with the interest
/// level its category holds for the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResourceCandidate {
    pub resource_id: i64,
    pub name: String,
    pub link: String,
    pub description: String,
    pub difficulty_level: i32,
    pub category_id: i64,
    pub category_name: String,
    pub category_description: String,
    pub interest_level: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Supplies rating-filtered candidates per request. Implementations must
/// return each category's candidates already ordered best-first; the
/// selection step only ever takes a prefix of that order.
#[async_trait]
pub trait CandidateFetcher: Send + Sync {
    async fn candidates_for_user(
        &self,
        user_id: &str,
        min_rating: f64,
        min_rating_count: i64,
    ) -> AppResult<Vec<ResourceCandidate>>;

    async fn candidates_for_user_in_categories(
        &self,
        user_id: &str,
        category_ids: &[i64],
        min_rating: f64,
        min_rating_count: i64,
    ) -> AppResult<Vec<ResourceCandidate>>;
}

/// Supplies the user's declared category interests for a request.
#[async_trait]
pub trait InterestProvider: Send + Sync {
    async fn interests_for_user(&self, user_id: &str) -> AppResult<Vec<UserCategoryInterest>>;
}
