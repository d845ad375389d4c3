use crate::repository::trains_repository::entity::TrainFindEntity;
use bson::oid::ObjectId;

pub struct Train {
    pub _id: ObjectId,

    pub name: String,

    pub base_price: f64,
    pub discount_percentage: f64,
}

impl From<TrainFindEntity> for Train {
    fn from(value: TrainFindEntity) -> Self {
        Self {
            _id: value._id,
            name: value.name,
            base_price: value.base_price,
            discount_percentage: value.discount_percentage,
        }
    }
}
