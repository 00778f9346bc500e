use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's declared relationship with a category. Skill and interest are
/// 1-5 levels; interest drives the recommendation allocation weights.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserCategoryInterest {
    pub user_id: String,
    pub category_id: i64,
    pub category_name: String,
    pub skill_level: i32,
    pub interest_level: i32,
}
