use crate::infrastructure::db::DbPool;
use crate::{
    domain::recommendation::{CandidateFetcher, ResourceCandidate},
    error::AppResult,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Fetches rating-filtered recommendation candidates. Rows come back
/// grouped by category and ordered best-rated first inside each group;
/// the selection pipeline relies on that order and never re-derives it.
pub struct CandidateRepository {
    pool: Arc<DbPool>,
}

impl CandidateRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateFetcher for CandidateRepository {
    /// Candidates across every category the user declared an interest in
    async fn candidates_for_user(
        &self,
        user_id: &str,
        min_rating: f64,
        min_rating_count: i64,
    ) -> AppResult<Vec<ResourceCandidate>> {
        let pool = self.pool.as_ref();
        let candidates = sqlx::query_as::<_, ResourceCandidate>(
            r#"
            SELECT r.id AS resource_id, r.name, r.link, r.description, r.difficulty_level,
                   c.id AS category_id, c.name AS category_name,
                   c.description AS category_description,
                   ui.interest_level, rr.average_rating, r.owner
            FROM user_interests ui
            JOIN categories c ON c.id = ui.category_id
            JOIN resource_categories rc ON rc.category_id = c.id
            JOIN resources r ON r.id = rc.resource_id
            LEFT JOIN (
                SELECT resource_id,
                       AVG(rating)::DOUBLE PRECISION AS average_rating,
                       COUNT(*) AS rating_count
                FROM resource_ratings
                GROUP BY resource_id
            ) rr ON rr.resource_id = r.id
            WHERE ui.user_id = $1
              AND COALESCE(rr.average_rating, 0) >= $2
              AND COALESCE(rr.rating_count, 0) >= $3
            ORDER BY c.id, rr.average_rating DESC NULLS LAST, r.id
            "#,
        )
        .bind(user_id)
        .bind(min_rating)
        .bind(min_rating_count)
        .fetch_all(pool)
        .await?;

        Ok(candidates)
    }

    /// Candidates restricted to a category subset. Scoped categories the
    /// user never declared an interest in still yield rows, stamped with
    /// interest level 0.
    async fn candidates_for_user_in_categories(
        &self,
        user_id: &str,
        category_ids: &[i64],
        min_rating: f64,
        min_rating_count: i64,
    ) -> AppResult<Vec<ResourceCandidate>> {
        let pool = self.pool.as_ref();
        let candidates = sqlx::query_as::<_, ResourceCandidate>(
            r#"
            SELECT r.id AS resource_id, r.name, r.link, r.description, r.difficulty_level,
                   c.id AS category_id, c.name AS category_name,
                   c.description AS category_description,
                   COALESCE(ui.interest_level, 0) AS interest_level,
                   rr.average_rating, r.owner
            FROM categories c
            JOIN resource_categories rc ON rc.category_id = c.id
            JOIN resources r ON r.id = rc.resource_id
            LEFT JOIN user_interests ui
                   ON ui.category_id = c.id AND ui.user_id = $1
            LEFT JOIN (
                SELECT resource_id,
                       AVG(rating)::DOUBLE PRECISION AS average_rating,
                       COUNT(*) AS rating_count
                FROM resource_ratings
                GROUP BY resource_id
            ) rr ON rr.resource_id = r.id
            WHERE c.id = ANY($2)
              AND COALESCE(rr.average_rating, 0) >= $3
              AND COALESCE(rr.rating_count, 0) >= $4
            ORDER BY c.id, rr.average_rating DESC NULLS LAST, r.id
            "#,
        )
        .bind(user_id)
        .bind(category_ids)
        .bind(min_rating)
        .bind(min_rating_count)
        .fetch_all(pool)
        .await?;

        Ok(candidates)
    }
}
