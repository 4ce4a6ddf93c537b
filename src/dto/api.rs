//! DTOs exposed by the user search API.

use serde::{Deserialize, Serialize};

use crate::domain::query::ErrorReason;

/// Header carrying the opaque access credential.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Path of the search endpoint relative to the server root.
pub const USERS_PATH: &str = "/api/v1/users";

/// Query parameters accepted by the `/api/v1/users` service.
///
/// Numeric fields are already coerced: malformed input arrives here as `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersQuery {
    /// Free-text filter; empty disables filtering.
    pub query: String,
    /// Raw order field; validated by the query engine.
    pub order_field: String,
    /// Raw order direction code; validated by the query engine.
    pub order_by: i32,
    pub offset: usize,
    pub limit: usize,
}

/// Body of a `400 Bad Request` response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchErrorBody {
    pub error: String,
}

impl From<ErrorReason> for SearchErrorBody {
    fn from(reason: ErrorReason) -> Self {
        Self {
            error: reason.as_str().to_string(),
        }
    }
}
