use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::{
    domain::user::{User, UserRow},
    repository::{
        UserReader,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// In-memory [`UserReader`] holding the dataset loaded at startup.
#[derive(Clone, Debug)]
pub struct InMemoryUserRepository {
    users: Arc<[User]>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> RepositoryResult<Self> {
        let mut seen = HashSet::with_capacity(users.len());
        if let Some(duplicate) = users.iter().find(|user| !seen.insert(user.id)) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Duplicate user id: {}",
                duplicate.id
            )));
        }

        Ok(Self {
            users: users.into(),
        })
    }

    /// Loads users from a CSV dataset with a header row.
    pub fn from_csv_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let repo = Self::from_csv_reader(file)?;
        info!("Loaded {} users from {}", repo.users.len(), path.display());
        Ok(repo)
    }

    /// Reads `id,first_name,last_name,age,about,gender` rows, keeping file order.
    pub fn from_csv_reader<R: Read>(reader: R) -> RepositoryResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let users = rdr
            .deserialize::<UserRow>()
            .map(|row| row.map(User::from))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(users)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserReader for InMemoryUserRepository {
    fn list_users(&self) -> RepositoryResult<Arc<[User]>> {
        Ok(Arc::clone(&self.users))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::user::Gender;

    const DATASET: &str = "\
id,first_name,last_name,age,about,gender
0,Boyd,Wolf,22,Nulla cillum enim,male
1,Hilda,Mayer,21,\"Sit commodo, consectetur\",female
";

    #[test]
    fn loads_rows_in_file_order() {
        let repo = InMemoryUserRepository::from_csv_reader(DATASET.as_bytes()).unwrap();
        let users = repo.list_users().unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Boyd Wolf");
        assert_eq!(users[1].name, "Hilda Mayer");
        assert_eq!(users[1].about, "Sit commodo, consectetur");
        assert_eq!(users[1].gender, Gender::Female);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let repo = InMemoryUserRepository::from_csv_path(file.path()).unwrap();

        assert_eq!(repo.len(), 2);
        assert!(!repo.is_empty());
    }

    #[test]
    fn header_only_dataset_is_empty() {
        let data = "id,first_name,last_name,age,about,gender\n";

        let repo = InMemoryUserRepository::from_csv_reader(data.as_bytes()).unwrap();

        assert!(repo.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = InMemoryUserRepository::from_csv_path("/nonexistent/dataset.csv");

        assert!(matches!(result, Err(RepositoryError::Io(_))));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let data = "id,first_name,last_name,age,about,gender\nx,Boyd,Wolf,22,About,male\n";

        let result = InMemoryUserRepository::from_csv_reader(data.as_bytes());

        assert!(matches!(result, Err(RepositoryError::Parse(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let data = "\
id,first_name,last_name,age,about,gender
1,Boyd,Wolf,22,About,male
1,Hilda,Mayer,21,About,female
";

        let result = InMemoryUserRepository::from_csv_reader(data.as_bytes());

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn list_users_shares_the_same_allocation() {
        let repo = InMemoryUserRepository::from_csv_reader(DATASET.as_bytes()).unwrap();

        let first = repo.list_users().unwrap();
        let second = repo.list_users().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }
}
