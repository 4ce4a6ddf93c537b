use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Io(err.to_string())
    }
}

impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => RepositoryError::Io(e.to_string()),

            csv::ErrorKind::Utf8 { .. } => {
                RepositoryError::Parse(format!("Invalid UTF-8 in dataset: {message}"))
            }

            csv::ErrorKind::UnequalLengths { .. } => {
                RepositoryError::Parse(format!("Malformed dataset row: {message}"))
            }

            csv::ErrorKind::Deserialize { .. } => {
                RepositoryError::Parse(format!("Deserialization error: {message}"))
            }

            _ => RepositoryError::Unexpected(format!("Unexpected csv error: {message}")),
        }
    }
}
