use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainsService: Send + Sync {
    ///
    /// Save new train
    ///
    /// ### Returns
    /// created [output::Train] with ID assigned by storage
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - base_price is negative
    ///     - discount_percentage is outside [0, 100]
    ///
    async fn create_train(&self, train: input::Train) -> Result<output::Train, Error>;

    ///
    /// Find train with given ID. Absence is not an error
    ///
    async fn find_train(&self, id: ObjectId) -> Result<Option<output::Train>, Error>;

    async fn find_trains(&self) -> Result<Vec<output::Train>, Error>;
}
