use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Internal Error")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
