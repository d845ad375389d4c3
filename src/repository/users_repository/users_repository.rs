use super::User;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn insert(&self, name: &str) -> Result<ObjectId, repository::Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<User>, repository::Error>;

    async fn find_all(&self) -> Result<Vec<User>, repository::Error>;
}
