pub mod error;
pub mod model;
pub mod service;

pub use error::UserInterestServiceError;
pub use model::UserCategoryInterest;
pub use service::UserInterestService;

use serde::{Deserialize, Serialize};

/// Response for user interest endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInterestResponse {
    pub category_id: i64,
    pub category_name: String,
    pub skill_level: i32,
    pub interest_level: i32,
}

/// Request to declare or update an interest in a category
#[derive(Debug, Serialize, Deserialize)]
pub struct SetInterestRequest {
    pub category_id: i64,
    pub skill_level: i32,
    pub interest_level: i32,
}

impl From<UserCategoryInterest> for UserInterestResponse {
    fn from(interest: UserCategoryInterest) -> Self {
        Self {
            category_id: interest.category_id,
            category_name: interest.category_name,
            skill_level: interest.skill_level,
            interest_level: interest.interest_level,
        }
    }
}
