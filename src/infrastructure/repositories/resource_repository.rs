use crate::infrastructure::db::DbPool;
use crate::{
    domain::resource::Resource,
    error::{AppError, AppResult},
};
use std::sync::Arc;

pub struct ResourceRepository {
    pool: Arc<DbPool>,
}

impl ResourceRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Get a resource by ID
    pub async fn find_by_id(&self, resource_id: i64) -> AppResult<Option<Resource>> {
        let pool = self.pool.as_ref();
        let resource = sqlx::query_as::<_, Resource>(
            r#"
            SELECT id, name, link, description, difficulty_level, owner, created_at
            FROM resources
            WHERE id = $1
            "#,
        )
        .bind(resource_id)
        .fetch_optional(pool)
        .await?;

        Ok(resource)
    }

    /// Get all resources in a category
    pub async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Resource>> {
        let pool = self.pool.as_ref();
        let resources = sqlx::query_as::<_, Resource>(
            r#"
            SELECT r.id, r.name, r.link, r.description, r.difficulty_level, r.owner, r.created_at
            FROM resources r
            JOIN resource_categories rc ON rc.resource_id = r.id
            WHERE rc.category_id = $1
            ORDER BY r.name
            "#,
        )
        .bind(category_id)
        .fetch_all(pool)
        .await?;

        Ok(resources)
    }

    /// Create a new resource
    pub async fn create(
        &self,
        name: &str,
        link: &str,
        description: &str,
        difficulty_level: i32,
        owner: Option<&str>,
    ) -> AppResult<Resource> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let resource = sqlx::query_as::<_, Resource>(
            r#"
            INSERT INTO resources (name, link, description, difficulty_level, owner, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, link, description, difficulty_level, owner, created_at
            "#,
        )
        .bind(name)
        .bind(link)
        .bind(description)
        .bind(difficulty_level)
        .bind(owner)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict("Resource link already exists".to_string());
                }
            }
            AppError::Database(e)
        })?;

        Ok(resource)
    }

    /// Attach a resource to a category
    pub async fn link_category(&self, resource_id: i64, category_id: i64) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO resource_categories (resource_id, category_id)
            VALUES ($1, $2)
            ON CONFLICT (resource_id, category_id) DO NOTHING
            "#,
        )
        .bind(resource_id)
        .bind(category_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Update a resource (name, link, description, difficulty)
    pub async fn update(&self, resource: &Resource) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            UPDATE resources
            SET name = $1, link = $2, description = $3, difficulty_level = $4
            WHERE id = $5
            "#,
        )
        .bind(&resource.name)
        .bind(&resource.link)
        .bind(&resource.description)
        .bind(resource.difficulty_level)
        .bind(resource.id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Delete a resource
    pub async fn delete(&self, resource_id: i64) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM resources
            WHERE id = $1
            "#,
        )
        .bind(resource_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Record a rating for a resource, replacing the rater's previous one
    pub async fn upsert_rating(
        &self,
        resource_id: i64,
        rater_id: &str,
        rating: i32,
    ) -> AppResult<()> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO resource_ratings (resource_id, rater_id, rating, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (resource_id, rater_id)
            DO UPDATE SET rating = EXCLUDED.rating, created_at = EXCLUDED.created_at
            "#,
        )
        .bind(resource_id)
        .bind(rater_id)
        .bind(rating)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(())
    }
}
