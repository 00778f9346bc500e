use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub link: String,
    pub description: String,
    pub difficulty_level: i32,
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}
