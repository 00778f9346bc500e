use super::error::RecommendationError;
use super::{messages, pipeline, CandidateFetcher, InterestProvider, ResourceCandidate};
use crate::domain::user_interest::UserCategoryInterest;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Hard cap on the size of a recommendation response.
pub const MAX_RESULTS: usize = 10;

pub struct RecommendationService {
    candidate_fetcher: Arc<dyn CandidateFetcher>,
    interest_provider: Arc<dyn InterestProvider>,
}

impl RecommendationService {
    pub fn new(
        candidate_fetcher: Arc<dyn CandidateFetcher>,
        interest_provider: Arc<dyn InterestProvider>,
    ) -> Self {
        Self {
            candidate_fetcher,
            interest_provider,
        }
    }
}

#[async_trait]
pub trait RecommendationServiceApi: Send + Sync {
    /// Recommends up to [`MAX_RESULTS`] resources across every category the
    /// user has declared an interest in, weighted by interest level.
    async fn get_recommended_resources(
        &self,
        user_id: &str,
        min_rating: f64,
        min_rating_count: i64,
    ) -> Result<Vec<ResourceCandidate>, RecommendationError>;

    /// Same pipeline, with candidate retrieval restricted to the given
    /// category subset. The subset is optional input from the caller, so a
    /// missing list and an empty list are rejected separately.
    async fn get_recommended_resources_in_categories(
        &self,
        user_id: &str,
        categories: Option<&[i64]>,
        min_rating: f64,
        min_rating_count: i64,
    ) -> Result<Vec<ResourceCandidate>, RecommendationError>;
}

#[async_trait]
impl RecommendationServiceApi for RecommendationService {
    async fn get_recommended_resources(
        &self,
        user_id: &str,
        min_rating: f64,
        min_rating_count: i64,
    ) -> Result<Vec<ResourceCandidate>, RecommendationError> {
        validate_request(user_id, min_rating, min_rating_count)?;

        tracing::info!(
            user_id = %user_id,
            min_rating,
            min_rating_count,
            "Recommendation request"
        );

        let candidates = self
            .candidate_fetcher
            .candidates_for_user(user_id, min_rating, min_rating_count)
            .await
            .map_err(RecommendationError::Retrieval)?;
        let interests = self
            .interest_provider
            .interests_for_user(user_id)
            .await
            .map_err(RecommendationError::Retrieval)?;

        Ok(assemble(candidates, interest_weights(&interests, None)))
    }

    async fn get_recommended_resources_in_categories(
        &self,
        user_id: &str,
        categories: Option<&[i64]>,
        min_rating: f64,
        min_rating_count: i64,
    ) -> Result<Vec<ResourceCandidate>, RecommendationError> {
        validate_request(user_id, min_rating, min_rating_count)?;
        let category_ids = match categories {
            None => return Err(RecommendationError::Validation(messages::CATEGORY_LIST_MISSING)),
            Some([]) => return Err(RecommendationError::Validation(messages::CATEGORY_LIST_EMPTY)),
            Some(ids) => ids,
        };

        tracing::info!(
            user_id = %user_id,
            categories = ?category_ids,
            min_rating,
            min_rating_count,
            "Scoped recommendation request"
        );

        let candidates = self
            .candidate_fetcher
            .candidates_for_user_in_categories(user_id, category_ids, min_rating, min_rating_count)
            .await
            .map_err(RecommendationError::Retrieval)?;
        let interests = self
            .interest_provider
            .interests_for_user(user_id)
            .await
            .map_err(RecommendationError::Retrieval)?;

        Ok(assemble(
            candidates,
            interest_weights(&interests, Some(category_ids)),
        ))
    }
}

/// Fail-fast input checks, run before any collaborator call.
fn validate_request(
    user_id: &str,
    min_rating: f64,
    min_rating_count: i64,
) -> Result<(), RecommendationError> {
    if user_id.trim().is_empty() {
        return Err(RecommendationError::Validation(messages::USER_ID_BLANK));
    }
    if min_rating < 0.0 {
        return Err(RecommendationError::Validation(messages::MIN_RATING_NEGATIVE));
    }
    if min_rating_count < 0 {
        return Err(RecommendationError::Validation(
            messages::MIN_RATING_COUNT_NEGATIVE,
        ));
    }
    Ok(())
}

/// Collapses the declared interests into allocation weights, optionally
/// restricted to the requested category subset.
fn interest_weights(
    interests: &[UserCategoryInterest],
    scope: Option<&[i64]>,
) -> HashMap<i64, i32> {
    let scope: Option<HashSet<i64>> = scope.map(|ids| ids.iter().copied().collect());
    interests
        .iter()
        .filter(|interest| {
            scope
                .as_ref()
                .map_or(true, |ids| ids.contains(&interest.category_id))
        })
        .map(|interest| (interest.category_id, interest.interest_level))
        .collect()
}

/// Runs the in-memory pipeline over one request's snapshots.
fn assemble(
    candidates: Vec<ResourceCandidate>,
    weights: HashMap<i64, i32>,
) -> Vec<ResourceCandidate> {
    let groups = pipeline::partition_by_category(candidates);
    let slots = pipeline::allocate_slots(&groups, &weights, MAX_RESULTS);

    tracing::debug!(plan = ?slots, "Allocation plan computed");

    pipeline::select_and_merge(groups, &slots, MAX_RESULTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use pretty_assertions::assert_eq;
    use std::error::Error;

    struct FakeFetcher {
        candidates: Vec<ResourceCandidate>,
    }

    #[async_trait]
    impl CandidateFetcher for FakeFetcher {
        async fn candidates_for_user(
            &self,
            _user_id: &str,
            _min_rating: f64,
            _min_rating_count: i64,
        ) -> AppResult<Vec<ResourceCandidate>> {
            Ok(self.candidates.clone())
        }

        async fn candidates_for_user_in_categories(
            &self,
            _user_id: &str,
            category_ids: &[i64],
            _min_rating: f64,
            _min_rating_count: i64,
        ) -> AppResult<Vec<ResourceCandidate>> {
            Ok(self
                .candidates
                .iter()
                .filter(|c| category_ids.contains(&c.category_id))
                .cloned()
                .collect())
        }
    }

    struct FakeInterestProvider {
        interests: Vec<UserCategoryInterest>,
    }

    #[async_trait]
    impl InterestProvider for FakeInterestProvider {
        async fn interests_for_user(&self, _user_id: &str) -> AppResult<Vec<UserCategoryInterest>> {
            Ok(self.interests.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl CandidateFetcher for FailingFetcher {
        async fn candidates_for_user(
            &self,
            _user_id: &str,
            _min_rating: f64,
            _min_rating_count: i64,
        ) -> AppResult<Vec<ResourceCandidate>> {
            Err(AppError::Internal("connection refused".to_string()))
        }

        async fn candidates_for_user_in_categories(
            &self,
            _user_id: &str,
            _category_ids: &[i64],
            _min_rating: f64,
            _min_rating_count: i64,
        ) -> AppResult<Vec<ResourceCandidate>> {
            Err(AppError::Internal("connection refused".to_string()))
        }
    }

    fn candidate(resource_id: i64, category_id: i64, interest_level: i32) -> ResourceCandidate {
        ResourceCandidate {
            resource_id,
            name: format!("resource-{}", resource_id),
            link: format!("https://example.com/resources/{}", resource_id),
            description: "a learning resource".to_string(),
            difficulty_level: 3,
            category_id,
            category_name: format!("category-{}", category_id),
            category_description: "a category".to_string(),
            interest_level,
            average_rating: Some(4.5),
            owner: None,
        }
    }

    fn candidates(category_id: i64, interest_level: i32, count: i64) -> Vec<ResourceCandidate> {
        (0..count)
            .map(|i| candidate(category_id * 100 + i, category_id, interest_level))
            .collect()
    }

    fn interest(category_id: i64, interest_level: i32) -> UserCategoryInterest {
        UserCategoryInterest {
            user_id: "jdoe".to_string(),
            category_id,
            category_name: format!("category-{}", category_id),
            skill_level: 2,
            interest_level,
        }
    }

    fn service(
        candidates: Vec<ResourceCandidate>,
        interests: Vec<UserCategoryInterest>,
    ) -> RecommendationService {
        RecommendationService::new(
            Arc::new(FakeFetcher { candidates }),
            Arc::new(FakeInterestProvider { interests }),
        )
    }

    fn assert_validation(err: RecommendationError, expected: &str) {
        match err {
            RecommendationError::Validation(msg) => assert_eq!(msg, expected),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_user_id_is_rejected_by_both_entry_points() {
        let service = service(vec![], vec![]);

        for user_id in ["", "   ", "\t\n"] {
            let err = service
                .get_recommended_resources(user_id, 3.0, 1)
                .await
                .unwrap_err();
            assert_validation(err, messages::USER_ID_BLANK);

            let err = service
                .get_recommended_resources_in_categories(user_id, Some(&[1]), 3.0, 1)
                .await
                .unwrap_err();
            assert_validation(err, messages::USER_ID_BLANK);
        }
    }

    #[tokio::test]
    async fn test_negative_minimum_rating_is_rejected() {
        let service = service(vec![], vec![]);

        let err = service
            .get_recommended_resources("jdoe", -0.5, 1)
            .await
            .unwrap_err();
        assert_validation(err, messages::MIN_RATING_NEGATIVE);
    }

    #[tokio::test]
    async fn test_negative_minimum_rating_count_is_rejected() {
        let service = service(vec![], vec![]);

        let err = service
            .get_recommended_resources("jdoe", 3.0, -1)
            .await
            .unwrap_err();
        assert_validation(err, messages::MIN_RATING_COUNT_NEGATIVE);
    }

    #[tokio::test]
    async fn test_zero_thresholds_are_valid() {
        let service = service(vec![], vec![]);

        let result = service.get_recommended_resources("jdoe", 0.0, 0).await;
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_category_list_is_rejected() {
        let service = service(vec![], vec![]);

        let err = service
            .get_recommended_resources_in_categories("jdoe", None, 3.0, 1)
            .await
            .unwrap_err();
        assert_validation(err, messages::CATEGORY_LIST_MISSING);
    }

    #[tokio::test]
    async fn test_empty_category_list_is_rejected() {
        let service = service(vec![], vec![]);

        let err = service
            .get_recommended_resources_in_categories("jdoe", Some(&[]), 3.0, 1)
            .await
            .unwrap_err();
        assert_validation(err, messages::CATEGORY_LIST_EMPTY);
    }

    #[tokio::test]
    async fn test_two_equal_interests_split_the_budget_evenly() {
        let mut pool = candidates(10, 5, 7);
        pool.extend(candidates(20, 5, 7));
        let service = service(pool, vec![interest(10, 5), interest(20, 5)]);

        let result = service
            .get_recommended_resources("jdoe", 3.0, 1)
            .await
            .unwrap();

        assert_eq!(result.len(), 10);
        assert_eq!(result.iter().filter(|c| c.category_id == 10).count(), 5);
        assert_eq!(result.iter().filter(|c| c.category_id == 20).count(), 5);
        // Each category contributed its best-ranked prefix
        let from_10: Vec<i64> = result
            .iter()
            .filter(|c| c.category_id == 10)
            .map(|c| c.resource_id)
            .collect();
        assert_eq!(from_10, vec![1000, 1001, 1002, 1003, 1004]);
    }

    #[tokio::test]
    async fn test_single_interest_is_capped_by_availability() {
        let service = service(candidates(10, 5, 7), vec![interest(10, 5)]);

        let result = service
            .get_recommended_resources("jdoe", 3.0, 1)
            .await
            .unwrap();

        assert_eq!(result.len(), 7);
    }

    #[tokio::test]
    async fn test_collaborator_failure_is_wrapped_with_cause() {
        let service = RecommendationService::new(
            Arc::new(FailingFetcher),
            Arc::new(FakeInterestProvider { interests: vec![] }),
        );

        let err = service
            .get_recommended_resources("jdoe", 3.0, 1)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), messages::RETRIEVAL_FAILED);
        let cause = err.source().expect("original cause must be preserved");
        assert!(cause.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_no_declared_interests_yields_empty_result() {
        let service = service(candidates(10, 0, 7), vec![]);

        let result = service
            .get_recommended_resources("jdoe", 3.0, 1)
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_result_is_sorted_by_interest_level_descending() {
        let mut pool = candidates(10, 2, 4);
        pool.extend(candidates(20, 5, 4));
        pool.extend(candidates(30, 3, 4));
        let service = service(
            pool,
            vec![interest(10, 2), interest(20, 5), interest(30, 3)],
        );

        let result = service
            .get_recommended_resources("jdoe", 3.0, 1)
            .await
            .unwrap();

        assert!(result.len() <= MAX_RESULTS);
        assert!(result
            .windows(2)
            .all(|pair| pair[0].interest_level >= pair[1].interest_level));
    }

    #[tokio::test]
    async fn test_identical_calls_return_identical_ordering() {
        let mut pool = candidates(10, 4, 6);
        pool.extend(candidates(20, 4, 6));
        let service = service(pool, vec![interest(10, 4), interest(20, 4)]);

        let first = service
            .get_recommended_resources("jdoe", 3.0, 1)
            .await
            .unwrap();
        let second = service
            .get_recommended_resources("jdoe", 3.0, 1)
            .await
            .unwrap();

        let first_ids: Vec<i64> = first.iter().map(|c| c.resource_id).collect();
        let second_ids: Vec<i64> = second.iter().map(|c| c.resource_id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test]
    async fn test_scoped_request_only_weighs_interests_in_scope() {
        let mut pool = candidates(10, 5, 10);
        pool.extend(candidates(20, 5, 10));
        let service = service(pool, vec![interest(10, 5), interest(20, 5)]);

        let result = service
            .get_recommended_resources_in_categories("jdoe", Some(&[10]), 3.0, 1)
            .await
            .unwrap();

        // Out-of-scope interests neither appear nor dilute the allocation
        assert_eq!(result.len(), 10);
        assert!(result.iter().all(|c| c.category_id == 10));
    }

    #[tokio::test]
    async fn test_candidates_without_declared_interest_receive_no_slots() {
        let mut pool = candidates(10, 5, 4);
        pool.extend(candidates(99, 0, 4));
        let service = service(pool, vec![interest(10, 5)]);

        let result = service
            .get_recommended_resources("jdoe", 3.0, 1)
            .await
            .unwrap();

        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|c| c.category_id == 10));
    }

    #[tokio::test]
    async fn test_starved_interest_shrinks_the_realized_result() {
        // Category 20 is declared but has no candidates passing the rating
        // filters; its weight still halves what category 10 may contribute.
        let service = service(
            candidates(10, 5, 10),
            vec![interest(10, 5), interest(20, 5)],
        );

        let result = service
            .get_recommended_resources("jdoe", 3.0, 1)
            .await
            .unwrap();

        assert_eq!(result.len(), 5);
    }
}
