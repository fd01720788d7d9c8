use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("User ID {0:?} does not exist and cannot act")]
    UnknownActor(i32),
    #[error("User ID {user_id:?} is not the creator of {entity} ID {entity_id:?}")]
    NotCreator {
        user_id: i32,
        entity: &'static str,
        entity_id: i32,
    },
}
