use crate::repository::tickets_repository::entity::TicketFindEntity;
use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct Ticket {
    pub _id: ObjectId,

    pub user_id: ObjectId,
    pub train_id: ObjectId,

    pub booking_date: OffsetDateTime,
    pub final_price: f64,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            _id: value._id,
            user_id: value.user_id,
            train_id: value.train_id,
            booking_date: value.booking_date.into(),
            final_price: value.final_price,
        }
    }
}
