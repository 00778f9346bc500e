use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;

pub struct TagRepository {
    pool: Arc<DbPool>,
}

impl TagRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Get all tags attached to a resource
    pub async fn tags_for_resource(&self, resource_id: i64) -> AppResult<Vec<String>> {
        let pool = self.pool.as_ref();
        let tags = sqlx::query_scalar::<_, String>(
            r#"
            SELECT tag
            FROM resource_tags
            WHERE resource_id = $1
            ORDER BY tag
            "#,
        )
        .bind(resource_id)
        .fetch_all(pool)
        .await?;

        Ok(tags)
    }

    /// Attach a tag to a resource; attaching an existing tag is a no-op
    pub async fn add_tag(&self, resource_id: i64, tag: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO resource_tags (resource_id, tag)
            VALUES ($1, $2)
            ON CONFLICT (resource_id, tag) DO NOTHING
            "#,
        )
        .bind(resource_id)
        .bind(tag)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Detach a tag from a resource
    pub async fn remove_tag(&self, resource_id: i64, tag: &str) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM resource_tags
            WHERE resource_id = $1 AND tag = $2
            "#,
        )
        .bind(resource_id)
        .bind(tag)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
