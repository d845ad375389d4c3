use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Ticket {
    #[serde(with = "de_object_id")]
    pub user_id: ObjectId,
    #[serde(with = "de_object_id")]
    pub train_id: ObjectId,
}

mod de_object_id {
    //!
    //! Module allows to deserialize JSON hex string directly
    //! to ObjectId, so it's not neccessary to do it in services
    //!

    use bson::oid::ObjectId;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<ObjectId, D::Error> {
        let string = String::deserialize(d)?;
        let id = ObjectId::parse_str(&string).map_err(serde::de::Error::custom)?;

        Ok(id)
    }
}
