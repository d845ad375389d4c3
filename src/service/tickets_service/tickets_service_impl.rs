use super::TicketsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, TicketsRepository},
    service::{trains_service::TrainsService, users_service::UsersService},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;

///
/// Computes the final ticket price: base price less a percentage discount.
/// Callers are expected to pass discount_percentage in [0, 100]
///
pub fn calculate_ticket_price(base_price: f64, discount_percentage: f64) -> f64 {
    base_price - base_price * discount_percentage / 100.0
}

pub struct TicketsServiceImpl {
    users_service: Arc<dyn UsersService>,
    trains_service: Arc<dyn TrainsService>,
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(
        users_service: Arc<dyn UsersService>,
        trains_service: Arc<dyn TrainsService>,
        repository: Arc<dyn TicketsRepository>,
    ) -> Self {
        Self {
            users_service,
            trains_service,
            repository,
        }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket);

        self.users_service
            .find_user(ticket.user_id)
            .await?
            .ok_or(Error::UserNotExist)?;
        let train = self
            .trains_service
            .find_train(ticket.train_id)
            .await?
            .ok_or(Error::TrainNotExist)?;

        let booking_date = OffsetDateTime::now_utc();
        let final_price = calculate_ticket_price(train.base_price, train.discount_percentage);

        let id = self
            .repository
            .insert(ticket.user_id, ticket.train_id, booking_date, final_price)
            .await?;
        tracing::info!(%id, "created ticket");

        Ok(output::Ticket {
            id: id.to_hex(),
            user_id: ticket.user_id.to_hex(),
            train_id: ticket.train_id.to_hex(),
            booking_date,
            final_price,
        })
    }

    async fn find_ticket(&self, id: ObjectId) -> Result<Option<output::Ticket>, Error> {
        tracing::info!("finding ticket");

        let ticket = self.repository.find(id).await?;
        tracing::info!(found = ticket.is_some(), "ticket lookup finished");

        Ok(ticket.map(output::Ticket::from))
    }

    async fn find_tickets(&self) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("finding tickets");

        let tickets = self.repository.find_all().await?;
        tracing::info!(count = tickets.len(), "found tickets");

        Ok(tickets.into_iter().map(output::Ticket::from).collect())
    }

    async fn update_ticket(
        &self,
        id: ObjectId,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error> {
        tracing::info!("updating ticket");
        tracing::trace!(?ticket);

        self.repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        self.users_service
            .find_user(ticket.user_id)
            .await?
            .ok_or(Error::UserNotExist)?;
        let train = self
            .trains_service
            .find_train(ticket.train_id)
            .await?
            .ok_or(Error::TrainNotExist)?;

        let booking_date = OffsetDateTime::now_utc();
        let final_price = calculate_ticket_price(train.base_price, train.discount_percentage);

        let update_result = self
            .repository
            .update(id, ticket.user_id, ticket.train_id, booking_date, final_price)
            .await;

        match update_result {
            Ok(()) => {
                tracing::info!(%id, "updated ticket");
                Ok(output::Ticket {
                    id: id.to_hex(),
                    user_id: ticket.user_id.to_hex(),
                    train_id: ticket.train_id.to_hex(),
                    booking_date,
                    final_price,
                })
            }
            // ticket deleted between the existence check and the write
            Err(repository::Error::NoDocumentUpdated) => Err(Error::TicketNotExist),
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn delete_ticket(&self, id: ObjectId) -> Result<(), Error> {
        tracing::info!("deleting ticket");

        self.repository.delete(id).await?;
        tracing::info!(%id, "deleted ticket");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        repository::{MockTicketsRepository, Ticket},
        service::{trains_service::MockTrainsService, users_service::MockUsersService},
    };
    use std::time::Duration;
    use time::macros::datetime;

    fn harini(id: ObjectId) -> output::User {
        output::User {
            id: id.to_hex(),
            name: "Harini".to_string(),
        }
    }

    fn express(id: ObjectId) -> output::Train {
        output::Train {
            id: id.to_hex(),
            name: "Express".to_string(),
            base_price: 100.0,
            discount_percentage: 10.0,
        }
    }

    fn ticket(id: ObjectId, user_id: ObjectId, train_id: ObjectId) -> Ticket {
        Ticket {
            _id: id,
            user_id,
            train_id,
            booking_date: datetime!(2024-02-12 18:57:00 UTC),
            final_price: 90.0,
        }
    }

    #[tokio::test]
    async fn find_tickets_returns_storage_sequence() {
        let first = ObjectId::new();
        let second = ObjectId::new();
        let mut repository = MockTicketsRepository::new();
        repository.expect_find_all().times(1).returning(move || {
            Ok(vec![
                ticket(first, ObjectId::new(), ObjectId::new()),
                ticket(second, ObjectId::new(), ObjectId::new()),
            ])
        });
        let service = TicketsServiceImpl::new(
            Arc::new(MockUsersService::new()),
            Arc::new(MockTrainsService::new()),
            Arc::new(repository),
        );

        let tickets = service.find_tickets().await.unwrap();

        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].id, first.to_hex());
        assert_eq!(tickets[1].id, second.to_hex());
    }

    #[tokio::test]
    async fn find_tickets_database_error() {
        let mut repository = MockTicketsRepository::new();
        repository.expect_find_all().returning(|| {
            Err(repository::Error::Mongo(
                mongodb::error::ErrorKind::Custom(Arc::new("any database error")).into(),
            ))
        });
        let service = TicketsServiceImpl::new(
            Arc::new(MockUsersService::new()),
            Arc::new(MockTrainsService::new()),
            Arc::new(repository),
        );

        let result = service.find_tickets().await;

        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[tokio::test]
    async fn find_ticket_exists() {
        let id = ObjectId::new();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .times(1)
            .returning(|id| Ok(Some(ticket(id, ObjectId::new(), ObjectId::new()))));
        let service = TicketsServiceImpl::new(
            Arc::new(MockUsersService::new()),
            Arc::new(MockTrainsService::new()),
            Arc::new(repository),
        );

        let found = service.find_ticket(id).await.unwrap();

        assert!(found.is_some_and(|found| found.id == id.to_hex()));
    }

    #[tokio::test]
    async fn find_ticket_not_exists() {
        let mut repository = MockTicketsRepository::new();
        repository.expect_find().times(1).returning(|_| Ok(None));
        let service = TicketsServiceImpl::new(
            Arc::new(MockUsersService::new()),
            Arc::new(MockTrainsService::new()),
            Arc::new(repository),
        );

        let found = service.find_ticket(ObjectId::new()).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn create_ticket_ok() {
        let user_id = ObjectId::new();
        let train_id = ObjectId::new();
        let ticket_id = ObjectId::new();

        let mut users_service = MockUsersService::new();
        users_service
            .expect_find_user()
            .returning(|id| Ok(Some(harini(id))));
        let mut trains_service = MockTrainsService::new();
        trains_service
            .expect_find_train()
            .returning(|id| Ok(Some(express(id))));
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(move |_, _, _, _| Ok(ticket_id));
        let service = TicketsServiceImpl::new(
            Arc::new(users_service),
            Arc::new(trains_service),
            Arc::new(repository),
        );

        let before = OffsetDateTime::now_utc();
        let ticket = service
            .create_ticket(input::Ticket { user_id, train_id })
            .await
            .unwrap();

        assert_eq!(ticket.id, ticket_id.to_hex());
        assert_eq!(ticket.user_id, user_id.to_hex());
        assert_eq!(ticket.train_id, train_id.to_hex());
        assert_eq!(ticket.final_price, 90.0);
        assert!(ticket.booking_date >= before);
        assert!(ticket.booking_date <= OffsetDateTime::now_utc());
    }

    #[tokio::test]
    async fn create_ticket_user_not_exist() {
        let mut users_service = MockUsersService::new();
        users_service.expect_find_user().returning(|_| Ok(None));
        let mut trains_service = MockTrainsService::new();
        trains_service.expect_find_train().never();
        let mut repository = MockTicketsRepository::new();
        repository.expect_insert().never();
        let service = TicketsServiceImpl::new(
            Arc::new(users_service),
            Arc::new(trains_service),
            Arc::new(repository),
        );

        let result = service
            .create_ticket(input::Ticket {
                user_id: ObjectId::new(),
                train_id: ObjectId::new(),
            })
            .await;

        assert!(matches!(result, Err(Error::UserNotExist)));
    }

    #[tokio::test]
    async fn create_ticket_train_not_exist() {
        let mut users_service = MockUsersService::new();
        users_service
            .expect_find_user()
            .returning(|id| Ok(Some(harini(id))));
        let mut trains_service = MockTrainsService::new();
        trains_service.expect_find_train().returning(|_| Ok(None));
        let mut repository = MockTicketsRepository::new();
        repository.expect_insert().never();
        let service = TicketsServiceImpl::new(
            Arc::new(users_service),
            Arc::new(trains_service),
            Arc::new(repository),
        );

        let result = service
            .create_ticket(input::Ticket {
                user_id: ObjectId::new(),
                train_id: ObjectId::new(),
            })
            .await;

        assert!(matches!(result, Err(Error::TrainNotExist)));
    }

    #[tokio::test]
    async fn update_ticket_replaces_references_and_recomputes_price() {
        let ticket_id = ObjectId::new();
        let new_user_id = ObjectId::new();
        let new_train_id = ObjectId::new();
        let old_booking_date = datetime!(2024-02-12 18:57:00 UTC);

        let mut users_service = MockUsersService::new();
        users_service
            .expect_find_user()
            .returning(|id| Ok(Some(harini(id))));
        let mut trains_service = MockTrainsService::new();
        trains_service.expect_find_train().returning(|id| {
            Ok(Some(output::Train {
                base_price: 200.0,
                discount_percentage: 25.0,
                ..express(id)
            }))
        });
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .times(1)
            .returning(|id| Ok(Some(ticket(id, ObjectId::new(), ObjectId::new()))));
        repository
            .expect_update()
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        let service = TicketsServiceImpl::new(
            Arc::new(users_service),
            Arc::new(trains_service),
            Arc::new(repository),
        );

        let updated = service
            .update_ticket(
                ticket_id,
                input::Ticket {
                    user_id: new_user_id,
                    train_id: new_train_id,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, ticket_id.to_hex());
        assert_eq!(updated.user_id, new_user_id.to_hex());
        assert_eq!(updated.train_id, new_train_id.to_hex());
        assert_eq!(updated.final_price, 150.0);
        assert!(updated.booking_date > old_booking_date);
    }

    #[tokio::test]
    async fn update_ticket_not_exist() {
        let mut users_service = MockUsersService::new();
        users_service.expect_find_user().never();
        let mut trains_service = MockTrainsService::new();
        trains_service.expect_find_train().never();
        let mut repository = MockTicketsRepository::new();
        repository.expect_find().times(1).returning(|_| Ok(None));
        repository.expect_update().never();
        let service = TicketsServiceImpl::new(
            Arc::new(users_service),
            Arc::new(trains_service),
            Arc::new(repository),
        );

        let result = service
            .update_ticket(
                ObjectId::new(),
                input::Ticket {
                    user_id: ObjectId::new(),
                    train_id: ObjectId::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(Error::TicketNotExist)));
    }

    #[tokio::test]
    async fn update_ticket_user_not_exist() {
        let mut users_service = MockUsersService::new();
        users_service.expect_find_user().returning(|_| Ok(None));
        let mut trains_service = MockTrainsService::new();
        trains_service.expect_find_train().never();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .returning(|id| Ok(Some(ticket(id, ObjectId::new(), ObjectId::new()))));
        repository.expect_update().never();
        let service = TicketsServiceImpl::new(
            Arc::new(users_service),
            Arc::new(trains_service),
            Arc::new(repository),
        );

        let result = service
            .update_ticket(
                ObjectId::new(),
                input::Ticket {
                    user_id: ObjectId::new(),
                    train_id: ObjectId::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(Error::UserNotExist)));
    }

    #[tokio::test]
    async fn update_ticket_train_not_exist() {
        let mut users_service = MockUsersService::new();
        users_service
            .expect_find_user()
            .returning(|id| Ok(Some(harini(id))));
        let mut trains_service = MockTrainsService::new();
        trains_service.expect_find_train().returning(|_| Ok(None));
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .returning(|id| Ok(Some(ticket(id, ObjectId::new(), ObjectId::new()))));
        repository.expect_update().never();
        let service = TicketsServiceImpl::new(
            Arc::new(users_service),
            Arc::new(trains_service),
            Arc::new(repository),
        );

        let result = service
            .update_ticket(
                ObjectId::new(),
                input::Ticket {
                    user_id: ObjectId::new(),
                    train_id: ObjectId::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(Error::TrainNotExist)));
    }

    #[tokio::test]
    async fn update_ticket_deleted_meanwhile() {
        let mut users_service = MockUsersService::new();
        users_service
            .expect_find_user()
            .returning(|id| Ok(Some(harini(id))));
        let mut trains_service = MockTrainsService::new();
        trains_service
            .expect_find_train()
            .returning(|id| Ok(Some(express(id))));
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .returning(|id| Ok(Some(ticket(id, ObjectId::new(), ObjectId::new()))));
        repository
            .expect_update()
            .returning(|_, _, _, _, _| Err(repository::Error::NoDocumentUpdated));
        let service = TicketsServiceImpl::new(
            Arc::new(users_service),
            Arc::new(trains_service),
            Arc::new(repository),
        );

        let result = service
            .update_ticket(
                ObjectId::new(),
                input::Ticket {
                    user_id: ObjectId::new(),
                    train_id: ObjectId::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(Error::TicketNotExist)));
    }

    #[tokio::test]
    async fn delete_ticket_delegates_to_storage() {
        let id = ObjectId::new();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_delete()
            .withf(move |deleted_id| *deleted_id == id)
            .times(1)
            .returning(|_| Ok(()));
        let service = TicketsServiceImpl::new(
            Arc::new(MockUsersService::new()),
            Arc::new(MockTrainsService::new()),
            Arc::new(repository),
        );

        let result = service.delete_ticket(id).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_ticket_database_error() {
        let mut repository = MockTicketsRepository::new();
        repository.expect_delete().returning(|_| {
            Err(repository::Error::Mongo(
                mongodb::error::ErrorKind::Custom(Arc::new("any database error")).into(),
            ))
        });
        let service = TicketsServiceImpl::new(
            Arc::new(MockUsersService::new()),
            Arc::new(MockTrainsService::new()),
            Arc::new(repository),
        );

        let result = service.delete_ticket(ObjectId::new()).await;

        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[test]
    fn calculate_ticket_price_quarter_discount() {
        assert_eq!(calculate_ticket_price(200.0, 25.0), 150.0);
    }

    #[test]
    fn calculate_ticket_price_tenth_discount() {
        assert_eq!(calculate_ticket_price(100.0, 10.0), 90.0);
    }

    #[test]
    fn calculate_ticket_price_no_discount() {
        assert_eq!(calculate_ticket_price(120.5, 0.0), 120.5);
    }

    #[test]
    fn calculate_ticket_price_full_discount() {
        assert_eq!(calculate_ticket_price(120.5, 100.0), 0.0);
    }

    #[tokio::test]
    async fn create_ticket_booking_date_is_recent() {
        let mut users_service = MockUsersService::new();
        users_service
            .expect_find_user()
            .returning(|id| Ok(Some(harini(id))));
        let mut trains_service = MockTrainsService::new();
        trains_service
            .expect_find_train()
            .returning(|id| Ok(Some(express(id))));
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_insert()
            .returning(|_, _, _, _| Ok(ObjectId::new()));
        let service = TicketsServiceImpl::new(
            Arc::new(users_service),
            Arc::new(trains_service),
            Arc::new(repository),
        );

        let ticket = service
            .create_ticket(input::Ticket {
                user_id: ObjectId::new(),
                train_id: ObjectId::new(),
            })
            .await
            .unwrap();

        let age = OffsetDateTime::now_utc() - ticket.booking_date;
        assert!(age < Duration::from_secs(5));
    }
}
