use super::{
    entity::{TrainFindEntity, TrainInsertEntity},
    Train, TrainsRepository,
};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson};
use futures_util::TryStreamExt;
use mongodb::{error::ErrorKind, Database};
use std::sync::Arc;

const TRAINS: &str = "trains";

pub struct TrainsRepositoryImpl {
    database: Database,
}

impl TrainsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = TRAINS, "creating collection");
        database.create_collection(TRAINS).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl TrainsRepository for TrainsRepositoryImpl {
    async fn insert(
        &self,
        name: &str,
        base_price: f64,
        discount_percentage: f64,
    ) -> Result<ObjectId, repository::Error> {
        let insert_entity = TrainInsertEntity {
            name,
            base_price,
            discount_percentage,
        };

        let insert_result = self
            .database
            .collection::<TrainInsertEntity>(TRAINS)
            .insert_one(insert_entity)
            .await?;

        match insert_result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            _ => Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of returned id")).into(),
            )),
        }
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Train>, repository::Error> {
        let entity = self
            .database
            .collection::<TrainFindEntity>(TRAINS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Train::from);

        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<Train>, repository::Error> {
        let entities: Vec<TrainFindEntity> = self
            .database
            .collection::<TrainFindEntity>(TRAINS)
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(entities.into_iter().map(Train::from).collect())
    }
}
