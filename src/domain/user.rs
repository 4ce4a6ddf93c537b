use serde::{Deserialize, Serialize};

/// Gender tag attached to every user record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Searchable user record as exposed over the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    /// First and last name joined by a single space.
    pub name: String,
    pub age: i32,
    pub about: String,
    pub gender: Gender,
}

/// Row of the user dataset before the display name is derived.
#[derive(Clone, Debug, Deserialize)]
pub struct UserRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub about: String,
    pub gender: Gender,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: format!("{} {}", row.first_name, row.last_name),
            age: row.age,
            about: row.about,
            gender: row.gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_first_and_last_name() {
        let user = User::from(UserRow {
            id: 7,
            first_name: "Boyd".to_string(),
            last_name: "Wolf".to_string(),
            age: 22,
            about: "Nulla cillum".to_string(),
            gender: Gender::Male,
        });

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Boyd Wolf");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let user = User {
            id: 1,
            name: "Hilda Mayer".to_string(),
            age: 21,
            about: "Sit commodo".to_string(),
            gender: Gender::Female,
        };

        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Hilda Mayer",
                "age": 21,
                "about": "Sit commodo",
                "gender": "female",
            })
        );
    }
}
