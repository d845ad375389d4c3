use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,

    pub user_id: ObjectId,
    pub train_id: ObjectId,

    pub booking_date: DateTime,
    pub final_price: f64,
}
