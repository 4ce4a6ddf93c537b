use thiserror::Error;

use crate::domain::query::QueryError;
use crate::repository::errors::RepositoryError;

pub mod search;

/// Errors surfaced by the service layer to the HTTP routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error(transparent)]
    BadOrder(#[from] QueryError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
