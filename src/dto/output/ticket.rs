use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct Ticket {
    pub id: String,
    pub user_id: String,
    pub train_id: String,
    pub booking_date: OffsetDateTime,
    pub final_price: f64,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value._id.to_hex(),
            user_id: value.user_id.to_hex(),
            train_id: value.train_id.to_hex(),
            booking_date: value.booking_date,
            final_price: value.final_price,
        }
    }
}
