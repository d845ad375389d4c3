use super::Train;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainsRepository: Send + Sync {
    async fn insert(
        &self,
        name: &str,
        base_price: f64,
        discount_percentage: f64,
    ) -> Result<ObjectId, repository::Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Train>, repository::Error>;

    async fn find_all(&self) -> Result<Vec<Train>, repository::Error>;
}
