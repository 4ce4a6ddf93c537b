use crate::domain::query::UserQuery;
use crate::domain::user::User;
use crate::dto::api::UsersQuery;
use crate::repository::UserReader;
use crate::services::{ServiceError, ServiceResult};

/// Checks the access credential sent by the caller.
///
/// Empty or missing tokens are always rejected. When `expected` is set the
/// token must match it exactly; otherwise any non-empty token is accepted.
pub fn authorize(token: Option<&str>, expected: Option<&str>) -> ServiceResult<()> {
    match (token, expected) {
        (None, _) => Err(ServiceError::Unauthorized),
        (Some(token), _) if token.is_empty() => Err(ServiceError::Unauthorized),
        (Some(token), Some(expected)) if token != expected => Err(ServiceError::Unauthorized),
        _ => Ok(()),
    }
}

/// Returns the requested page of users matching the query.
///
/// The ordering is validated before the dataset is touched.
pub fn search_users<R>(repo: &R, params: UsersQuery) -> ServiceResult<Vec<User>>
where
    R: UserReader + ?Sized,
{
    let query = UserQuery::try_new(
        params.query,
        &params.order_field,
        params.order_by,
        params.offset,
        params.limit,
    )?;

    let users = repo.list_users()?;

    Ok(query.run(&users))
}
