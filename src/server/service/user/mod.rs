//! Identity service.
//!
//! Registers users under validated handles, manages their opaque capability flags, and turns
//! a user ID into the [`Actor`] every mutating service operation requires.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, integrity::ReferentialIntegrityError, Error},
        model::{actor::Actor, handle::Handle},
    },
};

/// Service for registering users and asserting their identity.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user under `handle`
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The registered user with every capability flag unset
    /// - `Err(Error::ValidationError)` - Handle is not 1 to 32 characters of `[a-z0-9]`
    /// - `Err(Error::DuplicateName)` - Handle is already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register_user(&self, handle: &str) -> Result<UserDto, Error> {
        let handle = Handle::parse(handle)?;

        let user = UserRepository::new(self.db)
            .create(&handle)
            .await
            .map_err(|e| Error::from_insert(e, "User", handle.as_str()))?;

        tracing::info!(user_id = %user.id, handle = %user.handle, "Registered user");

        Ok(user.into())
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    pub async fn get_user_by_handle(&self, handle: &str) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_handle(handle).await?;

        Ok(user.map(UserDto::from))
    }

    /// Replaces the capability flags of a user
    ///
    /// The flags are stored for whatever sits above the core; no operation here consults them.
    pub async fn set_capabilities(
        &self,
        user_id: i32,
        verified: bool,
        trusted: bool,
        admin: bool,
    ) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .update_capabilities(user_id, verified, trusted, admin)
            .await?
            .ok_or_else(|| ReferentialIntegrityError::not_found("User", user_id))?;

        tracing::info!(
            user_id = %user.id,
            verified, trusted, admin,
            "Updated user capabilities"
        );

        Ok(user.into())
    }

    /// Deletes a user along with every setup, group and sheet they created
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - User did not exist
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(user_id = %user_id, "Deleted user");
        }

        Ok(deleted)
    }

    /// Asserts that `user_id` is a registered user able to act
    ///
    /// # Returns
    /// - `Ok(Actor)` - Identity to hand to mutating service operations
    /// - `Err(Error::AuthError)` - No user exists with the ID
    pub async fn actor(&self, user_id: i32) -> Result<Actor, Error> {
        match UserRepository::new(self.db).get(user_id).await? {
            Some(user) => Ok(Actor::from(&user)),
            None => {
                tracing::warn!(user_id = %user_id, "Refused actor for unknown user");

                Err(AuthError::UnknownActor(user_id).into())
            }
        }
    }
}
