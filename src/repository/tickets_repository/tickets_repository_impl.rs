use super::{
    entity::{TicketFindEntity, TicketInsertEntity},
    Ticket, TicketsRepository,
};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{error::ErrorKind, Database};
use std::sync::Arc;
use time::OffsetDateTime;

const TICKETS: &str = "tickets";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = TICKETS, "creating collection");
        database.create_collection(TICKETS).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        user_id: ObjectId,
        train_id: ObjectId,
        booking_date: OffsetDateTime,
        final_price: f64,
    ) -> Result<ObjectId, repository::Error> {
        let insert_entity = TicketInsertEntity {
            user_id,
            train_id,
            booking_date: booking_date.into(),
            final_price,
        };

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(insert_entity)
            .await?;

        match insert_result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            _ => Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of returned id")).into(),
            )),
        }
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, repository::Error> {
        let entity = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Ticket::from);

        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, repository::Error> {
        let entities: Vec<TicketFindEntity> = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(entities.into_iter().map(Ticket::from).collect())
    }

    async fn update(
        &self,
        id: ObjectId,
        user_id: ObjectId,
        train_id: ObjectId,
        booking_date: OffsetDateTime,
        final_price: f64,
    ) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "user_id": user_id,
                        "train_id": train_id,
                        "booking_date": DateTime::from(booking_date),
                        "final_price": final_price,
                    },
                },
            )
            .await?;

        match update_result.matched_count {
            0 => Err(Error::NoDocumentUpdated),
            _ => Ok(()),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<(), repository::Error> {
        // deleted_count is ignored on purpose, missing ticket is a no-op
        self.database
            .collection::<Document>(TICKETS)
            .delete_one(doc! {
                "_id": id,
            })
            .await?;

        Ok(())
    }
}
