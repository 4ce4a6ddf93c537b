//! Reqwest-backed client for the user search endpoint.
//!
//! The client validates requests locally, performs a single GET with a fixed
//! timeout and classifies every outcome into [`ClientError`].

use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use validator::Validate;

use crate::domain::query::{ErrorReason, OrderBy};
use crate::domain::user::User;
use crate::dto::api::{ACCESS_TOKEN_HEADER, SearchErrorBody};

pub mod errors;

pub use errors::{ClientError, ClientResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Parameters of a user search.
#[derive(Clone, Debug, Default, Validate)]
pub struct SearchRequest {
    #[validate(range(min = 0, code = "negative_limit", message = "limit must be >= 0"))]
    pub limit: i32,
    #[validate(range(min = 0, code = "negative_offset", message = "offset must be >= 0"))]
    pub offset: i32,
    /// Substring searched in name and about; empty matches everything.
    pub query: String,
    /// `Id`, `Age` or `Name`; empty means `Name`.
    pub order_field: String,
    pub order_by: OrderBy,
}

/// Page of users returned by [`SearchClient::find_users`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub users: Vec<User>,
    /// `true` when more users exist past this page.
    pub next_page: bool,
}

#[derive(Serialize)]
struct SearchQueryParams<'a> {
    limit: i32,
    offset: i32,
    query: &'a str,
    order_field: &'a str,
    order_by: OrderBy,
}

/// Client for `GET /api/v1/users`.
#[derive(Clone, Debug)]
pub struct SearchClient {
    client: Client,
    url: Url,
    access_token: String,
}

impl SearchClient {
    /// Builds a client with [`DEFAULT_TIMEOUT`].
    ///
    /// `url` is the full endpoint URL, e.g. `http://host:8080/api/v1/users`.
    pub fn new(url: Url, access_token: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(url, access_token, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        url: Url,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            access_token: access_token.into(),
        })
    }

    /// Searches users, returning one page and whether more pages exist.
    pub async fn find_users(&self, request: &SearchRequest) -> ClientResult<SearchResponse> {
        request.validate()?;

        // One extra record tells whether another page exists.
        let params = SearchQueryParams {
            limit: request.limit.saturating_add(1),
            offset: request.offset,
            query: &request.query,
            order_field: &request.order_field,
            order_by: request.order_by,
        };

        let response = self
            .client
            .get(self.url.clone())
            .header(ACCESS_TOKEN_HEADER, self.access_token.as_str())
            .query(&params)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!("Search responded with {status} ({} bytes)", body.len());

        classify_response(status, &body, request)
    }
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(error.to_string())
    } else {
        ClientError::Transport(error.to_string())
    }
}

fn classify_response(
    status: StatusCode,
    body: &[u8],
    request: &SearchRequest,
) -> ClientResult<SearchResponse> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ClientError::Unauthorized),
        StatusCode::BAD_REQUEST => Err(map_bad_request(body, request)),
        _ if !status.is_success() => Err(ClientError::UnexpectedStatus(status.as_u16())),
        _ => parse_users(body, request),
    }
}

fn map_bad_request(body: &[u8], request: &SearchRequest) -> ClientError {
    let decoded: SearchErrorBody = match serde_json::from_slice(body) {
        Ok(decoded) => decoded,
        Err(error) => return ClientError::UndecodableErrorBody(error.to_string()),
    };

    match decoded.error.parse::<ErrorReason>() {
        Ok(ErrorReason::BadOrderField) => ClientError::BadOrder {
            order_field: request.order_field.clone(),
            order_by: request.order_by,
        },
        Err(reason) => ClientError::BadRequest(reason),
    }
}

fn parse_users(body: &[u8], request: &SearchRequest) -> ClientResult<SearchResponse> {
    let mut users: Vec<User> = serde_json::from_slice(body)
        .map_err(|error| ClientError::MalformedBody(error.to_string()))?;

    let limit = usize::try_from(request.limit).unwrap_or(0);
    let next_page = users.len() > limit;
    users.truncate(limit);

    Ok(SearchResponse { users, next_page })
}
