use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::{error, warn};
use serde::Deserialize;

use crate::dto::api::{ACCESS_TOKEN_HEADER, SearchErrorBody, UsersQuery};
use crate::models::config::ServerConfig;
use crate::repository::SharedUserReader;
use crate::services::ServiceError;
use crate::services::search::{authorize, search_users};

#[derive(Debug, Default, Deserialize)]
struct ApiV1UsersQueryParams {
    query: Option<String>,
    order_field: Option<String>,
    order_by: Option<String>,
    offset: Option<String>,
    limit: Option<String>,
}

/// Parses an integer parameter; missing or malformed values become `0`.
fn int_or_zero(value: Option<&str>) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// Order direction code; values outside `i32` stay invalid rather than wrapping.
fn order_code(value: Option<&str>) -> i32 {
    let code = int_or_zero(value);
    i32::try_from(code).unwrap_or(if code < 0 { i32::MIN } else { i32::MAX })
}

/// Like [`int_or_zero`], with negative values clamped to `0` and large ones
/// saturated.
fn count_or_zero(value: Option<&str>) -> usize {
    let count = int_or_zero(value).max(0);
    usize::try_from(count).unwrap_or(usize::MAX)
}

impl From<ApiV1UsersQueryParams> for UsersQuery {
    fn from(params: ApiV1UsersQueryParams) -> Self {
        Self {
            order_by: order_code(params.order_by.as_deref()),
            offset: count_or_zero(params.offset.as_deref()),
            limit: count_or_zero(params.limit.as_deref()),
            query: params.query.unwrap_or_default(),
            order_field: params.order_field.unwrap_or_default(),
        }
    }
}

#[get("/v1/users")]
pub async fn api_v1_users(
    req: HttpRequest,
    repo: web::Data<SharedUserReader>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let token = req
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    if authorize(token, server_config.access_token.as_deref()).is_err() {
        return HttpResponse::Unauthorized()
            .content_type("text/plain; charset=utf-8")
            .body("incorrect AccessToken");
    }

    let params = match web::Query::<ApiV1UsersQueryParams>::from_query(req.query_string()) {
        Ok(params) => params.into_inner(),
        Err(e) => {
            warn!("Malformed search query string: {e}");
            ApiV1UsersQueryParams::default()
        }
    };

    match search_users(repo.get_ref(), params.into()) {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(ServiceError::BadOrder(e)) => {
            warn!("Rejected search request: {e}");
            HttpResponse::BadRequest().json(SearchErrorBody::from(e.reason()))
        }
        Err(e) => {
            error!("Failed to search users: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
