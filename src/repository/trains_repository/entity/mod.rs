mod train_find_entity;
mod train_insert_entity;

pub use train_find_entity::*;
pub use train_insert_entity::*;
