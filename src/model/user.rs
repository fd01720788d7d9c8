use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub handle: String,
    pub verified: bool,
    pub trusted: bool,
    pub admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::caddie_user::Model> for UserDto {
    fn from(user: entity::caddie_user::Model) -> Self {
        Self {
            id: user.id,
            handle: user.handle,
            verified: user.verified,
            trusted: user.trusted,
            admin: user.admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
