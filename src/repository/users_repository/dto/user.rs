use crate::repository::users_repository::entity::UserFindEntity;
use bson::oid::ObjectId;

pub struct User {
    pub _id: ObjectId,

    pub name: String,
}

impl From<UserFindEntity> for User {
    fn from(value: UserFindEntity) -> Self {
        Self {
            _id: value._id,
            name: value.name,
        }
    }
}
