use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::user_interest::{SetInterestRequest, UserInterestResponse, UserInterestService},
    error::AppResult,
};

pub struct UserInterestController {
    interest_service: Arc<UserInterestService>,
}

impl UserInterestController {
    pub fn new(interest_service: Arc<UserInterestService>) -> Self {
        Self { interest_service }
    }

    /// GET /api/users/{userId}/interests - List a user's declared interests
    pub async fn get_interests(
        State(controller): State<Arc<UserInterestController>>,
        Path(user_id): Path<String>,
    ) -> AppResult<Json<Vec<UserInterestResponse>>> {
        let interests = controller
            .interest_service
            .interests_for_user(&user_id)
            .await?;
        Ok(Json(interests))
    }

    /// PUT /api/users/{userId}/interests - Declare or update an interest
    pub async fn set_interest(
        State(controller): State<Arc<UserInterestController>>,
        Path(user_id): Path<String>,
        Json(request): Json<SetInterestRequest>,
    ) -> AppResult<StatusCode> {
        controller
            .interest_service
            .set_interest(&user_id, request)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// DELETE /api/users/{userId}/interests/{categoryId} - Remove an interest
    pub async fn remove_interest(
        State(controller): State<Arc<UserInterestController>>,
        Path((user_id, category_id)): Path<(String, i64)>,
    ) -> AppResult<StatusCode> {
        controller
            .interest_service
            .remove_interest(&user_id, category_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
