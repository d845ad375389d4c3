use super::{
    entity::{UserFindEntity, UserInsertEntity},
    User, UsersRepository,
};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson};
use futures_util::TryStreamExt;
use mongodb::{error::ErrorKind, Database};
use std::sync::Arc;

const USERS: &str = "users";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = USERS, "creating collection");
        database.create_collection(USERS).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn insert(&self, name: &str) -> Result<ObjectId, repository::Error> {
        let insert_entity = UserInsertEntity { name };

        let insert_result = self
            .database
            .collection::<UserInsertEntity>(USERS)
            .insert_one(insert_entity)
            .await?;

        match insert_result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            _ => Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of returned id")).into(),
            )),
        }
    }

    async fn find(&self, id: ObjectId) -> Result<Option<User>, repository::Error> {
        let entity = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(User::from);

        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<User>, repository::Error> {
        let entities: Vec<UserFindEntity> = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(entities.into_iter().map(User::from).collect())
    }
}
