use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::query::OrderBy;

/// Every way a call to [`super::SearchClient::find_users`] can fail.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request rejected locally; no network call was made.
    #[error("invalid search request: {0}")]
    InvalidRequest(#[from] ValidationErrors),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("bad AccessToken")]
    Unauthorized,

    /// Server rejected the order field or direction.
    #[error("order field `{order_field}` or direction {order_by:?} is invalid")]
    BadOrder {
        order_field: String,
        order_by: OrderBy,
    },

    /// Server returned `400` with a reason this client does not know.
    #[error("unknown bad request error: {0}")]
    BadRequest(String),

    #[error("cannot decode error body: {0}")]
    UndecodableErrorBody(String),

    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("cannot decode result body: {0}")]
    MalformedBody(String),
}

impl ClientError {
    /// Returns `true` when no HTTP response was received.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Transport(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
