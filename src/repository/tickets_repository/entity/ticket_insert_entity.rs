use bson::{oid::ObjectId, DateTime};
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity {
    pub user_id: ObjectId,
    pub train_id: ObjectId,

    pub booking_date: DateTime,
    pub final_price: f64,
}
