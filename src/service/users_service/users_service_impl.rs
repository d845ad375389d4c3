use super::UsersService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::UsersRepository,
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

pub struct UsersServiceImpl {
    repository: Arc<dyn UsersRepository>,
}

impl UsersServiceImpl {
    pub fn new(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn create_user(&self, user: input::User) -> Result<output::User, Error> {
        tracing::info!("creating user");

        let id = self.repository.insert(&user.name).await?;
        tracing::info!(%id, "created user");

        Ok(output::User {
            id: id.to_hex(),
            name: user.name,
        })
    }

    async fn find_user(&self, id: ObjectId) -> Result<Option<output::User>, Error> {
        tracing::info!("finding user");

        let user = self.repository.find(id).await?;
        tracing::info!(found = user.is_some(), "user lookup finished");

        Ok(user.map(output::User::from))
    }

    async fn find_users(&self) -> Result<Vec<output::User>, Error> {
        tracing::info!("finding users");

        let users = self.repository.find_all().await?;
        tracing::info!(count = users.len(), "found users");

        Ok(users.into_iter().map(output::User::from).collect())
    }
}
