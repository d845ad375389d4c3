use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    ///
    /// Save new user
    ///
    /// ### Returns
    /// created [output::User] with ID assigned by storage
    ///
    async fn create_user(&self, user: input::User) -> Result<output::User, Error>;

    ///
    /// Find user with given ID. Absence is not an error
    ///
    async fn find_user(&self, id: ObjectId) -> Result<Option<output::User>, Error>;

    async fn find_users(&self) -> Result<Vec<output::User>, Error>;
}
