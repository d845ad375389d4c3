use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TrainFindEntity {
    pub _id: ObjectId,

    pub name: String,

    pub base_price: f64,
    pub discount_percentage: f64,
}
