//! End-to-end tests for the recommendation pipeline, driven through the
//! public service API with in-memory collaborators.

use async_trait::async_trait;
use resourcehub_backend::domain::recommendation::{
    CandidateFetcher, InterestProvider, RecommendationService, RecommendationServiceApi,
    ResourceCandidate, MAX_RESULTS,
};
use resourcehub_backend::domain::user_interest::UserCategoryInterest;
use resourcehub_backend::error::{AppError, AppResult};
use std::error::Error;
use std::sync::Arc;

struct InMemoryCatalog {
    candidates: Vec<ResourceCandidate>,
    interests: Vec<UserCategoryInterest>,
}

#[async_trait]
impl CandidateFetcher for InMemoryCatalog {
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

#[async_trait]
impl InterestProvider for InMemoryCatalog {
    async fn interests_for_user(&self, _user_id: &str) -> AppResult<Vec<UserCategoryInterest>> {
        Ok(self.interests.clone())
    }
}

struct UnreachableCatalog;

#[async_trait]
impl CandidateFetcher for UnreachableCatalog {
    async fn candidates_for_user(
        &self,
        _user_id: &str,
        _min_rating: f64,
        _min_rating_count: i64,
    ) -> AppResult<Vec<ResourceCandidate>> {
        Err(AppError::Internal("database is unreachable".to_string()))
    }

    async fn candidates_for_user_in_categories(
        &self,
        _user_id: &str,
        _category_ids: &[i64],
        _min_rating: f64,
        _min_rating_count: i64,
    ) -> AppResult<Vec<ResourceCandidate>> {
        Err(AppError::Internal("database is unreachable".to_string()))
    }
}

#[async_trait]
impl InterestProvider for UnreachableCatalog {
    async fn interests_for_user(&self, _user_id: &str) -> AppResult<Vec<UserCategoryInterest>> {
        Err(AppError::Internal("database is unreachable".to_string()))
    }
}

fn candidate(resource_id: i64, category_id: i64, interest_level: i32) -> ResourceCandidate {
    ResourceCandidate {
        resource_id,
        name: format!("resource-{}", resource_id),
        link: format!("https://learn.example.com/{}", resource_id),
        description: "hands-on learning material".to_string(),
        difficulty_level: 2,
        category_id,
        category_name: format!("category-{}", category_id),
        category_description: "catalog category".to_string(),
        interest_level,
        average_rating: Some(4.2),
        owner: Some("curation-team".to_string()),
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
        skill_level: 3,
        interest_level,
    }
}

fn service_with(
    candidates: Vec<ResourceCandidate>,
    interests: Vec<UserCategoryInterest>,
) -> RecommendationService {
    let catalog = Arc::new(InMemoryCatalog {
        candidates,
        interests,
    });
    RecommendationService::new(catalog.clone(), catalog)
}

#[tokio::test]
async fn uneven_interests_fill_the_budget_proportionally() {
    // rust: level 5 of weight 10 -> 5 slots, databases: 3 -> 3, frontend: 2 -> 2
    let mut pool = candidates(1, 5, 6);
    pool.extend(candidates(2, 3, 4));
    pool.extend(candidates(3, 2, 3));
    let service = service_with(
        pool,
        vec![interest(1, 5), interest(2, 3), interest(3, 2)],
    );

    let result = service
        .get_recommended_resources("jdoe", 3.5, 2)
        .await
        .unwrap();

    assert_eq!(result.len(), MAX_RESULTS);
    assert_eq!(result.iter().filter(|c| c.category_id == 1).count(), 5);
    assert_eq!(result.iter().filter(|c| c.category_id == 2).count(), 3);
    assert_eq!(result.iter().filter(|c| c.category_id == 3).count(), 2);

    // Strongest interest leads the list, weakest closes it
    assert_eq!(result.first().unwrap().interest_level, 5);
    assert_eq!(result.last().unwrap().interest_level, 2);
    assert!(result
        .windows(2)
        .all(|pair| pair[0].interest_level >= pair[1].interest_level));
}

#[tokio::test]
async fn each_category_contributes_its_best_ranked_prefix() {
    let mut pool = candidates(1, 5, 6);
    pool.extend(candidates(2, 5, 6));
    let service = service_with(pool, vec![interest(1, 5), interest(2, 5)]);

    let result = service
        .get_recommended_resources("jdoe", 0.0, 0)
        .await
        .unwrap();

    let from_first: Vec<i64> = result
        .iter()
        .filter(|c| c.category_id == 1)
        .map(|c| c.resource_id)
        .collect();
    assert_eq!(from_first, vec![100, 101, 102, 103, 104]);
}

#[tokio::test]
async fn result_never_exceeds_the_budget() {
    let mut pool = Vec::new();
    let mut interests = Vec::new();
    for category_id in 1..=8 {
        pool.extend(candidates(category_id, 5, 20));
        interests.push(interest(category_id, 5));
    }
    let service = service_with(pool, interests);

    let result = service
        .get_recommended_resources("jdoe", 1.0, 1)
        .await
        .unwrap();

    assert!(result.len() <= MAX_RESULTS);
}

#[tokio::test]
async fn more_categories_than_budget_slots_yields_zero_slot_allocations() {
    // Twelve declared interests of equal weight against a budget of ten:
    // every category floors to zero slots
    let mut pool = Vec::new();
    let mut interests = Vec::new();
    for category_id in 1..=12 {
        pool.extend(candidates(category_id, 3, 5));
        interests.push(interest(category_id, 3));
    }
    let service = service_with(pool, interests);

    let result = service
        .get_recommended_resources("jdoe", 1.0, 1)
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn scoped_request_ignores_out_of_scope_candidates_and_weights() {
    let mut pool = candidates(1, 5, 8);
    pool.extend(candidates(2, 5, 8));
    pool.extend(candidates(3, 4, 8));
    let service = service_with(
        pool,
        vec![interest(1, 5), interest(2, 5), interest(3, 4)],
    );

    let result = service
        .get_recommended_resources_in_categories("jdoe", Some(&[1, 2]), 0.0, 0)
        .await
        .unwrap();

    assert_eq!(result.len(), MAX_RESULTS);
    assert!(result.iter().all(|c| c.category_id == 1 || c.category_id == 2));
    assert_eq!(result.iter().filter(|c| c.category_id == 1).count(), 5);
    assert_eq!(result.iter().filter(|c| c.category_id == 2).count(), 5);
}

#[tokio::test]
async fn collaborator_outage_surfaces_the_wrapped_error_on_both_entry_points() {
    let catalog = Arc::new(UnreachableCatalog);
    let service = RecommendationService::new(catalog.clone(), catalog);

    let err = service
        .get_recommended_resources("jdoe", 3.0, 1)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Error retrieving recommended resources");
    assert!(err
        .source()
        .expect("cause must be attached")
        .to_string()
        .contains("database is unreachable"));

    let err = service
        .get_recommended_resources_in_categories("jdoe", Some(&[1]), 3.0, 1)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Error retrieving recommended resources");
}

#[tokio::test]
async fn absent_interests_and_absent_candidates_are_successful_empty_results() {
    // No declared interests at all
    let service = service_with(candidates(1, 0, 5), vec![]);
    let result = service
        .get_recommended_resources("jdoe", 0.0, 0)
        .await
        .unwrap();
    assert!(result.is_empty());

    // Declared interests but nothing passed the rating filters
    let service = service_with(vec![], vec![interest(1, 5)]);
    let result = service
        .get_recommended_resources("jdoe", 0.0, 0)
        .await
        .unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn repeated_calls_are_deterministic() {
    let mut pool = candidates(1, 4, 7);
    pool.extend(candidates(2, 4, 7));
    pool.extend(candidates(3, 1, 7));
    let service = service_with(
        pool,
        vec![interest(1, 4), interest(2, 4), interest(3, 1)],
    );

    let first = service
        .get_recommended_resources("jdoe", 2.0, 1)
        .await
        .unwrap();
    let second = service
        .get_recommended_resources("jdoe", 2.0, 1)
        .await
        .unwrap();

    let first_ids: Vec<i64> = first.iter().map(|c| c.resource_id).collect();
    let second_ids: Vec<i64> = second.iter().map(|c| c.resource_id).collect();
    assert_eq!(first_ids, second_ids);
}
