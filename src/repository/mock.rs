//! Mock repository implementations for isolating services in tests.

use std::sync::Arc;

use mockall::mock;

use crate::domain::user::User;
use crate::repository::UserReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn list_users(&self) -> RepositoryResult<Arc<[User]>>;
    }
}
