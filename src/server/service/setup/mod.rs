//! Setup catalog service.
//!
//! Setups describe how to play one situation. Every write re-validates the fields, checks the
//! pin sits on the hole, and checks the wind speed against the courses that play the hole.
//! Mutations of existing setups are restricted to their creator.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::setup::{SetupDto, SetupFields},
    server::{
        data::{
            geometry::{course::CourseRepository, hole::HoleRepository, pin::PinRepository},
            setup::setup::SetupRepository,
        },
        error::{integrity::ReferentialIntegrityError, validation::ValidationError, Error},
        model::{actor::Actor, situation::Situation},
        util::validate,
    },
};

pub struct SetupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetupService<'a> {
    /// Creates a new instance of [`SetupService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a setup owned by `actor`
    ///
    /// The setup's game is taken from its hole.
    ///
    /// # Returns
    /// - `Ok(SetupDto)` - The created setup
    /// - `Err(Error::ValidationError)` - A field is malformed or the wind speed is not allowed
    ///   on any course playing the hole
    /// - `Err(Error::IntegrityError)` - Hole or pin does not exist, or the pin is on another hole
    /// - `Err(Error::DuplicateName)` - The actor already has a setup with this name
    pub async fn create_setup(&self, actor: Actor, fields: SetupFields) -> Result<SetupDto, Error> {
        let txn = self.db.begin().await?;

        let (game_id, fields) = validate_fields(&txn, fields).await?;
        let name = fields.name.clone();
        let setup = SetupRepository::new(&txn)
            .create(actor.user_id, game_id, fields)
            .await
            .map_err(|e| Error::from_insert(e, "Setup", &name))?;

        txn.commit().await?;

        tracing::info!(
            setup_id = %setup.id,
            user_id = %actor.user_id,
            situation = ?Situation::from(&setup),
            "Created setup {}",
            setup.name
        );

        Ok(setup.into())
    }

    /// Replaces every field of a setup, validated as on creation
    ///
    /// Only the setup's creator may update it.
    pub async fn update_setup(
        &self,
        actor: Actor,
        setup_id: i32,
        fields: SetupFields,
    ) -> Result<SetupDto, Error> {
        let txn = self.db.begin().await?;

        let setup_repo = SetupRepository::new(&txn);
        let setup = setup_repo
            .get(setup_id)
            .await?
            .ok_or_else(|| ReferentialIntegrityError::not_found("Setup", setup_id))?;
        actor.ensure_creator(setup.creator_id, "Setup", setup.id)?;

        let (game_id, fields) = validate_fields(&txn, fields).await?;
        let name = fields.name.clone();
        let setup = setup_repo
            .update(setup_id, game_id, fields)
            .await
            .map_err(|e| Error::from_insert(e, "Setup", &name))?
            .ok_or_else(|| ReferentialIntegrityError::not_found("Setup", setup_id))?;

        txn.commit().await?;

        tracing::info!(setup_id = %setup.id, user_id = %actor.user_id, "Updated setup");

        Ok(setup.into())
    }

    /// Deletes a setup, removing it from every group
    ///
    /// Only the setup's creator may delete it.
    pub async fn delete_setup(&self, actor: Actor, setup_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let setup_repo = SetupRepository::new(&txn);
        let setup = setup_repo
            .get(setup_id)
            .await?
            .ok_or_else(|| ReferentialIntegrityError::not_found("Setup", setup_id))?;
        actor.ensure_creator(setup.creator_id, "Setup", setup.id)?;

        setup_repo.delete(setup_id).await?;

        txn.commit().await?;

        tracing::info!(setup_id = %setup_id, user_id = %actor.user_id, "Deleted setup");

        Ok(())
    }

    pub async fn get_setup(&self, setup_id: i32) -> Result<Option<SetupDto>, Error> {
        let setup = SetupRepository::new(self.db).get(setup_id).await?;

        Ok(setup.map(SetupDto::from))
    }

    /// Lists the setups created by `creator_id` ordered by ID
    pub async fn list_setups_by_creator(&self, creator_id: i32) -> Result<Vec<SetupDto>, Error> {
        let setups = SetupRepository::new(self.db)
            .get_by_creator(creator_id)
            .await?;

        Ok(setups.into_iter().map(SetupDto::from).collect())
    }

    /// Lists every setup targeting `situation`, from any creator, ordered by ID
    pub async fn list_setups_for_situation(
        &self,
        situation: Situation,
    ) -> Result<Vec<SetupDto>, Error> {
        let setups = SetupRepository::new(self.db)
            .get_by_situation(situation)
            .await?;

        Ok(setups.into_iter().map(SetupDto::from).collect())
    }
}

/// Validates setup fields against each other and the stored geometry
///
/// Returns the game ID of the hole along with the fields, name trimmed.
async fn validate_fields<C: ConnectionTrait>(
    db: &C,
    mut fields: SetupFields,
) -> Result<(i32, SetupFields), Error> {
    fields.name = validate::name(&fields.name)?;
    validate::text(fields.text.as_deref())?;
    validate::media_url("image_url", fields.image_url.as_deref())?;
    validate::media_url("video_url", fields.video_url.as_deref())?;
    validate::time_ms(fields.time_ms)?;
    validate::wind_speed(fields.wind_speed)?;

    let hole = HoleRepository::new(db)
        .get(fields.hole_id)
        .await?
        .ok_or_else(|| ReferentialIntegrityError::not_found("Hole", fields.hole_id))?;
    let pin = PinRepository::new(db)
        .get(fields.pin_id)
        .await?
        .ok_or_else(|| ReferentialIntegrityError::not_found("Pin", fields.pin_id))?;

    if pin.hole_id != hole.id {
        return Err(ReferentialIntegrityError::PinNotOnHole {
            pin_id: pin.id,
            hole_id: hole.id,
        }
        .into());
    }

    // Holes not yet on any course accept any non-negative wind speed
    if let Some(allowed) = CourseRepository::new(db)
        .get_wind_speeds_for_hole(hole.id)
        .await?
    {
        if !allowed.contains(&fields.wind_speed) {
            return Err(ValidationError::WindSpeedNotAllowed {
                hole_id: hole.id,
                wind_speed: fields.wind_speed,
                allowed,
            }
            .into());
        }
    }

    Ok((hole.game_id, fields))
}
