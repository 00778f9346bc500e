use super::messages;
use crate::error::AppError;

/// The two failure modes of a recommendation call. Validation failures are
/// raised before any collaborator is invoked; a collaborator failure is
/// wrapped exactly once, keeping the original cause attached.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{}", messages::RETRIEVAL_FAILED)]
    Retrieval(#[source] AppError),
}

impl From<RecommendationError> for AppError {
    fn from(err: RecommendationError) -> Self {
        match err {
            RecommendationError::Validation(msg) => AppError::BadRequest(msg.to_string()),
            RecommendationError::Retrieval(cause) => {
                AppError::Internal(format!("{}: {}", messages::RETRIEVAL_FAILED, cause))
            }
        }
    }
}
