use std::sync::Arc;

use crate::{domain::user::User, repository::errors::RepositoryResult};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod user;

pub use user::InMemoryUserRepository;

/// Read access to the full, ordered user collection.
pub trait UserReader {
    fn list_users(&self) -> RepositoryResult<Arc<[User]>>;
}

/// Shared handle to a user source used by the HTTP layer.
pub type SharedUserReader = dyn UserReader + Send + Sync;
