//! Query engine over the user collection.
//!
//! A [`UserQuery`] is only constructed from validated input, so filtering,
//! sorting and pagination below never fail.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::user::User;

/// Errors produced while validating the requested ordering.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Order field is not one of `Id`, `Age` or `Name`.
    #[error("order field `{0}` is invalid")]
    BadOrderField(String),
    /// Order direction code is not one of the recognized values.
    #[error("order direction {0} is invalid")]
    BadOrderBy(i32),
}

impl QueryError {
    /// Reason code reported to clients.
    ///
    /// Both variants share [`ErrorReason::BadOrderField`] on the wire.
    pub const fn reason(&self) -> ErrorReason {
        match self {
            Self::BadOrderField(_) | Self::BadOrderBy(_) => ErrorReason::BadOrderField,
        }
    }
}

/// Typed reason carried by a `400 Bad Request` response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    BadOrderField,
}

impl ErrorReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadOrderField => "ErrorBadOrderField",
        }
    }
}

impl Display for ErrorReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ErrorBadOrderField" => Ok(Self::BadOrderField),
            other => Err(other.to_string()),
        }
    }
}

/// Record attribute used as the sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderField {
    Id,
    Age,
    #[default]
    Name,
}

impl OrderField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Age => "Age",
            Self::Name => "Name",
        }
    }

    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Age => a.age.cmp(&b.age),
            Self::Name => a.name.cmp(&b.name),
        }
    }
}

impl Display for OrderField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an order field; an empty string selects [`OrderField::Name`].
impl FromStr for OrderField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::default()),
            "Id" => Ok(Self::Id),
            "Age" => Ok(Self::Age),
            "Name" => Ok(Self::Name),
            other => Err(QueryError::BadOrderField(other.to_string())),
        }
    }
}

/// Sort direction. Travels as an integer code on the wire.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "i32", try_from = "i32")]
pub enum OrderBy {
    Ascending,
    /// Keep the source order of the records.
    #[default]
    Unordered,
    Descending,
}

impl OrderBy {
    pub const ASCENDING_CODE: i32 = -1;
    pub const UNORDERED_CODE: i32 = 0;
    pub const DESCENDING_CODE: i32 = 1;

    pub const fn code(self) -> i32 {
        match self {
            Self::Ascending => Self::ASCENDING_CODE,
            Self::Unordered => Self::UNORDERED_CODE,
            Self::Descending => Self::DESCENDING_CODE,
        }
    }
}

impl TryFrom<i32> for OrderBy {
    type Error = QueryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            Self::ASCENDING_CODE => Ok(Self::Ascending),
            Self::UNORDERED_CODE => Ok(Self::Unordered),
            Self::DESCENDING_CODE => Ok(Self::Descending),
            other => Err(QueryError::BadOrderBy(other)),
        }
    }
}

impl From<OrderBy> for i32 {
    fn from(value: OrderBy) -> Self {
        value.code()
    }
}

/// Validated search over the user collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQuery {
    /// Case-sensitive substring matched against name and about.
    pub query: String,
    pub order_field: OrderField,
    pub order_by: OrderBy,
    pub offset: usize,
    pub limit: usize,
}

impl UserQuery {
    /// Validates the raw ordering parameters and builds the query.
    pub fn try_new(
        query: impl Into<String>,
        order_field: &str,
        order_by: i32,
        offset: usize,
        limit: usize,
    ) -> Result<Self, QueryError> {
        let order_field = order_field.parse::<OrderField>()?;
        let order_by = OrderBy::try_from(order_by)?;

        Ok(Self {
            query: query.into(),
            order_field,
            order_by,
            offset,
            limit,
        })
    }

    /// Returns `true` when the user passes the free-text filter.
    pub fn matches(&self, user: &User) -> bool {
        self.query.is_empty()
            || user.name.contains(self.query.as_str())
            || user.about.contains(self.query.as_str())
    }

    /// Filters, sorts and paginates `users`, returning the requested page.
    pub fn run(&self, users: &[User]) -> Vec<User> {
        let mut found: Vec<&User> = users.iter().filter(|user| self.matches(user)).collect();

        let field = self.order_field;
        match self.order_by {
            OrderBy::Unordered => {}
            OrderBy::Ascending => found.sort_by(|a, b| field.compare(a, b)),
            OrderBy::Descending => found.sort_by(|a, b| field.compare(b, a)),
        }

        paginate(found, self.offset, self.limit)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Slices `items[offset..min(limit, len)]`, empty when the range is empty.
pub fn paginate<T>(mut items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    let end = limit.min(items.len());
    if offset >= end {
        return Vec::new();
    }
    items.truncate(end);
    items.split_off(offset)
}
