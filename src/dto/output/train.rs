use crate::repository;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Train {
    pub id: String,
    pub name: String,
    pub base_price: f64,
    pub discount_percentage: f64,
}

impl From<repository::Train> for Train {
    fn from(value: repository::Train) -> Self {
        Self {
            id: value._id.to_hex(),
            name: value.name,
            base_price: value.base_price,
            discount_percentage: value.discount_percentage,
        }
    }
}
