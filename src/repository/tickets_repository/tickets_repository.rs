use super::Ticket;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    async fn insert(
        &self,
        user_id: ObjectId,
        train_id: ObjectId,
        booking_date: OffsetDateTime,
        final_price: f64,
    ) -> Result<ObjectId, repository::Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Finds all tickets, in storage order
    ///
    async fn find_all(&self) -> Result<Vec<Ticket>, repository::Error>;

    ///
    /// Replaces ticket references, booking date and price
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when
    ///     - ticket with id does not exist
    ///
    async fn update(
        &self,
        id: ObjectId,
        user_id: ObjectId,
        train_id: ObjectId,
        booking_date: OffsetDateTime,
        final_price: f64,
    ) -> Result<(), repository::Error>;

    ///
    /// Deletes ticket. Deleting ticket that does not exist is a no-op
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), repository::Error>;
}
