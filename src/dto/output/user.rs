use crate::repository;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl From<repository::User> for User {
    fn from(value: repository::User) -> Self {
        Self {
            id: value._id.to_hex(),
            name: value.name,
        }
    }
}
