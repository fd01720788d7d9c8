//! The acting identity.
//!
//! Authentication happens outside of the core; callers hand services an [`Actor`] that asserts
//! which user is performing an operation. The only question the core asks of it is whether
//! the actor created the record being mutated.

use crate::server::{error::auth::AuthError, model::db::UserModel};

/// Identity assertion for the user performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i32,
}

impl Actor {
    /// Fails with [`AuthError::NotCreator`] unless this actor is `creator_id`.
    pub fn ensure_creator(
        &self,
        creator_id: i32,
        entity: &'static str,
        entity_id: i32,
    ) -> Result<(), AuthError> {
        if self.user_id == creator_id {
            return Ok(());
        }

        tracing::warn!(
            user_id = %self.user_id,
            entity_id = %entity_id,
            "Refused mutation of {} owned by another user",
            entity
        );

        Err(AuthError::NotCreator {
            user_id: self.user_id,
            entity,
            entity_id,
        })
    }
}

impl From<&UserModel> for Actor {
    fn from(user: &UserModel) -> Self {
        Self { user_id: user.id }
    }
}
