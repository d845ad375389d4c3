use serde::Serialize;

#[derive(Serialize)]
pub struct TrainInsertEntity<'a> {
    pub name: &'a str,

    pub base_price: f64,
    pub discount_percentage: f64,
}
