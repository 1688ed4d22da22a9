use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Malformed response from inference service: {0}")]
    MalformedResponse(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("A profile assessment is already in progress")]
    ProfileAssessmentInProgress,

    #[error("An image analysis is already in progress")]
    AnalysisInProgress,

    #[error("No user is logged in")]
    Unauthenticated,

    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Internal server error")]
    InternalServerError,
}
