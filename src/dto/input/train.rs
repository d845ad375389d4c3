use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Train {
    pub name: String,
    pub base_price: f64,
    pub discount_percentage: f64,
}
