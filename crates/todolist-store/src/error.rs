use thiserror::Error;
use todolist_core::CoreError;
use todolist_service::ServiceError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token storage: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("not found: {0}")]
    NotFound(String),
}
