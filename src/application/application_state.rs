use super::ApplicationEnv;
use crate::{
    repository::{TicketsRepositoryImpl, TrainsRepositoryImpl, UsersRepositoryImpl},
    service::{
        tickets_service::{TicketsService, TicketsServiceImpl},
        trains_service::{TrainsService, TrainsServiceImpl},
        users_service::{UsersService, UsersServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub users_service: Arc<dyn UsersService>,
    pub trains_service: Arc<dyn TrainsService>,
    pub tickets_service: Arc<dyn TicketsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = UsersRepositoryImpl::new(db.clone()).await?;
    let users_repository = Arc::new(users_repository);
    let trains_repository = TrainsRepositoryImpl::new(db.clone()).await?;
    let trains_repository = Arc::new(trains_repository);
    let tickets_repository = TicketsRepositoryImpl::new(db).await?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let users_service: Arc<dyn UsersService> = Arc::new(UsersServiceImpl::new(users_repository));
    let trains_service: Arc<dyn TrainsService> =
        Arc::new(TrainsServiceImpl::new(trains_repository));
    let tickets_service = TicketsServiceImpl::new(
        users_service.clone(),
        trains_service.clone(),
        tickets_repository,
    );
    let tickets_service = Arc::new(tickets_service);

    Ok((
        ApplicationState {
            users_service,
            trains_service,
            tickets_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
