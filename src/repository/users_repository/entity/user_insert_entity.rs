use serde::Serialize;

#[derive(Serialize)]
pub struct UserInsertEntity<'a> {
    pub name: &'a str,
}
