use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::{
        tickets_service::TicketsService, trains_service::TrainsService,
        users_service::UsersService,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/users", get(find_users).post(create_user))
        .route("/api/v1/users/:id", get(find_user))
        .route("/api/v1/trains", get(find_trains).post(create_train))
        .route("/api/v1/trains/:id", get(find_train))
        .route("/api/v1/tickets", get(find_tickets).post(create_ticket))
        .route(
            "/api/v1/tickets/:id",
            get(find_ticket).put(update_ticket).delete(delete_ticket),
        )
}

fn parse_object_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| Error::Validation("invalid id"))
}

async fn create_user(
    State(users_service): State<Arc<dyn UsersService>>,
    Json(user): Json<input::User>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let user = users_service.create_user(user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

async fn find_user(
    State(users_service): State<Arc<dyn UsersService>>,
    Path(id): Path<String>,
) -> Result<Json<output::User>, Error> {
    let id = parse_object_id(&id)?;
    let user = users_service.find_user(id).await?.ok_or(Error::UserNotExist)?;

    Ok(Json(user))
}

async fn find_users(
    State(users_service): State<Arc<dyn UsersService>>,
) -> Result<Json<Vec<output::User>>, Error> {
    let users = users_service.find_users().await?;

    Ok(Json(users))
}

async fn create_train(
    State(trains_service): State<Arc<dyn TrainsService>>,
    Json(train): Json<input::Train>,
) -> Result<(StatusCode, Json<output::Train>), Error> {
    let train = trains_service.create_train(train).await?;

    Ok((StatusCode::CREATED, Json(train)))
}

async fn find_train(
    State(trains_service): State<Arc<dyn TrainsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Train>, Error> {
    let id = parse_object_id(&id)?;
    let train = trains_service
        .find_train(id)
        .await?
        .ok_or(Error::TrainNotExist)?;

    Ok(Json(train))
}

async fn find_trains(
    State(trains_service): State<Arc<dyn TrainsService>>,
) -> Result<Json<Vec<output::Train>>, Error> {
    let trains = trains_service.find_trains().await?;

    Ok(Json(trains))
}

async fn create_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Json(ticket): Json<input::Ticket>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let ticket = tickets_service.create_ticket(ticket).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

async fn find_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Ticket>, Error> {
    let id = parse_object_id(&id)?;
    let ticket = tickets_service
        .find_ticket(id)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(ticket))
}

async fn find_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Result<Json<Vec<output::Ticket>>, Error> {
    let tickets = tickets_service.find_tickets().await?;

    Ok(Json(tickets))
}

async fn update_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
    Json(ticket): Json<input::Ticket>,
) -> Result<Json<output::Ticket>, Error> {
    let id = parse_object_id(&id)?;
    let ticket = tickets_service.update_ticket(id, ticket).await?;

    Ok(Json(ticket))
}

async fn delete_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = parse_object_id(&id)?;
    tickets_service.delete_ticket(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
