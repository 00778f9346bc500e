use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum UserInterestServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("interest not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for UserInterestServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => UserInterestServiceError::Invalid(msg),
            AppError::NotFound(_) => UserInterestServiceError::NotFound,
            _ => UserInterestServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<UserInterestServiceError> for AppError {
    fn from(err: UserInterestServiceError) -> Self {
        match err {
            UserInterestServiceError::Invalid(msg) => AppError::BadRequest(msg),
            UserInterestServiceError::NotFound => {
                AppError::NotFound("Interest not found".to_string())
            }
            UserInterestServiceError::Dependency(msg) => AppError::Internal(msg),
            UserInterestServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
