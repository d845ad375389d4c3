use super::TrainsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::TrainsRepository,
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

pub struct TrainsServiceImpl {
    repository: Arc<dyn TrainsRepository>,
}

impl TrainsServiceImpl {
    pub fn new(repository: Arc<dyn TrainsRepository>) -> Self {
        Self { repository }
    }

    fn validate_create_train(train: &input::Train) -> Result<(), Error> {
        if train.base_price < 0.0 {
            return Err(Error::Validation("base_price must not be negative"));
        }
        if !(0.0..=100.0).contains(&train.discount_percentage) {
            return Err(Error::Validation(
                "discount_percentage must be in range [0, 100]",
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl TrainsService for TrainsServiceImpl {
    async fn create_train(&self, train: input::Train) -> Result<output::Train, Error> {
        tracing::info!("creating train");
        tracing::trace!(?train);

        Self::validate_create_train(&train)?;

        let id = self
            .repository
            .insert(&train.name, train.base_price, train.discount_percentage)
            .await?;
        tracing::info!(%id, "created train");

        Ok(output::Train {
            id: id.to_hex(),
            name: train.name,
            base_price: train.base_price,
            discount_percentage: train.discount_percentage,
        })
    }

    async fn find_train(&self, id: ObjectId) -> Result<Option<output::Train>, Error> {
        tracing::info!("finding train");

        let train = self.repository.find(id).await?;
        tracing::info!(found = train.is_some(), "train lookup finished");

        Ok(train.map(output::Train::from))
    }

    async fn find_trains(&self) -> Result<Vec<output::Train>, Error> {
        tracing::info!("finding trains");

        let trains = self.repository.find_all().await?;
        tracing::info!(count = trains.len(), "found trains");

        Ok(trains.into_iter().map(output::Train::from).collect())
    }
}
