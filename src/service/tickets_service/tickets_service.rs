use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Book new ticket for the user and the train referenced by the input.
    /// Final price is computed from the train's base price and discount,
    /// booking date is set to current time
    ///
    /// ### Returns
    /// created [output::Ticket] with ID assigned by storage
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user with user_id does not exist
    /// - [Error::TrainNotExist] when train with train_id does not exist
    ///
    /// Nothing is persisted when either lookup fails
    ///
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<output::Ticket, Error>;

    ///
    /// Find ticket with given ID. Absence is not an error
    ///
    async fn find_ticket(&self, id: ObjectId) -> Result<Option<output::Ticket>, Error>;

    ///
    /// Find all tickets, in storage order
    ///
    async fn find_tickets(&self) -> Result<Vec<output::Ticket>, Error>;

    ///
    /// Replace ticket's user and train references, recompute the final
    /// price from the new train and refresh the booking date
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket with id does not exist,
    ///   nothing is persisted in that case
    /// - [Error::UserNotExist] when user with user_id does not exist
    /// - [Error::TrainNotExist] when train with train_id does not exist
    ///
    async fn update_ticket(
        &self,
        id: ObjectId,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error>;

    ///
    /// Delete ticket with given ID.
    /// Deleting ticket that does not exist is a no-op
    ///
    async fn delete_ticket(&self, id: ObjectId) -> Result<(), Error>;
}
