use crate::infrastructure::db::DbPool;
use crate::{
    domain::category::Category,
    error::{AppError, AppResult},
};
use std::sync::Arc;

pub struct CategoryRepository {
    pool: Arc<DbPool>,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Get all categories, alphabetically
    pub async fn find_all(&self) -> AppResult<Vec<Category>> {
        let pool = self.pool.as_ref();
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, created_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    /// Get a category by ID
    pub async fn find_by_id(&self, category_id: i64) -> AppResult<Option<Category>> {
        let pool = self.pool.as_ref();
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(category_id)
        .fetch_optional(pool)
        .await?;

        Ok(category)
    }

    /// Check if a category exists
    pub async fn exists(&self, category_id: i64) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE id = $1
            )
            "#,
        )
        .bind(category_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Create a new category
    pub async fn create(&self, name: &str, description: &str) -> AppResult<Category> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict("Category name already exists".to_string());
                }
            }
            AppError::Database(e)
        })?;

        Ok(category)
    }

    /// Update a category (name, description)
    pub async fn update(&self, category: &Category) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            UPDATE categories
            SET name = $1, description = $2
            WHERE id = $3
            "#,
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.id)
        .execute(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict("Category name already exists".to_string());
                }
            }
            AppError::Database(e)
        })?;

        Ok(())
    }

    /// Delete a category
    pub async fn delete(&self, category_id: i64) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(category_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
