use crate::infrastructure::db::DbPool;
use crate::{
    domain::recommendation::InterestProvider,
    domain::user_interest::UserCategoryInterest,
    error::AppResult,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct UserInterestRepository {
    pool: Arc<DbPool>,
}

impl UserInterestRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Get all declared interests for a user
    pub async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<UserCategoryInterest>> {
        let pool = self.pool.as_ref();
        let interests = sqlx::query_as::<_, UserCategoryInterest>(
            r#"
            SELECT ui.user_id, ui.category_id, c.name AS category_name,
                   ui.skill_level, ui.interest_level
            FROM user_interests ui
            JOIN categories c ON c.id = ui.category_id
            WHERE ui.user_id = $1
            ORDER BY ui.category_id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(interests)
    }

    /// Declare or update an interest
    pub async fn upsert(
        &self,
        user_id: &str,
        category_id: i64,
        skill_level: i32,
        interest_level: i32,
    ) -> AppResult<()> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO user_interests (user_id, category_id, skill_level, interest_level, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, category_id)
            DO UPDATE SET skill_level = EXCLUDED.skill_level,
                          interest_level = EXCLUDED.interest_level
            "#,
        )
        .bind(user_id)
        .bind(category_id)
        .bind(skill_level)
        .bind(interest_level)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Remove a declared interest
    pub async fn delete(&self, user_id: &str, category_id: i64) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM user_interests
            WHERE user_id = $1 AND category_id = $2
            "#,
        )
        .bind(user_id)
        .bind(category_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl InterestProvider for UserInterestRepository {
    async fn interests_for_user(&self, user_id: &str) -> AppResult<Vec<UserCategoryInterest>> {
        self.find_by_user(user_id).await
    }
}
