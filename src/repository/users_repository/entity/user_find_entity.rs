use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub _id: ObjectId,

    pub name: String,
}
