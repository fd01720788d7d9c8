//! Geometry registry service.
//!
//! Games, holes, pins and courses. Courses carry an ordered hole list, validated against the
//! configured [`HoleOrderPolicy`] and the course's game on every write, and a set of allowed
//! wind speeds that constrains the setups authored for their holes.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::geometry::{CourseDto, GameDto, HoleDto, PinDto},
    server::{
        data::geometry::{
            course::CourseRepository, game::GameRepository, hole::HoleRepository,
            pin::PinRepository,
        },
        error::{integrity::ReferentialIntegrityError, validation::ValidationError, Error},
        model::{
            db::{CourseModel, GameModel},
            policy::HoleOrderPolicy,
        },
        util::validate,
    },
};

pub struct GeometryService<'a> {
    db: &'a DatabaseConnection,
    policy: HoleOrderPolicy,
}

impl<'a> GeometryService<'a> {
    /// Creates a new instance of [`GeometryService`] validating hole orders with `policy`
    pub fn new(db: &'a DatabaseConnection, policy: HoleOrderPolicy) -> Self {
        Self { db, policy }
    }

    pub async fn create_game(&self, name: &str) -> Result<GameDto, Error> {
        let name = validate::name(name)?;

        let game = GameRepository::new(self.db).create(&name).await?;

        tracing::info!(game_id = %game.id, "Created game {}", game.name);

        Ok(game.into())
    }

    pub async fn get_game(&self, game_id: i32) -> Result<Option<GameDto>, Error> {
        let game = GameRepository::new(self.db).get(game_id).await?;

        Ok(game.map(GameDto::from))
    }

    pub async fn list_games(&self) -> Result<Vec<GameDto>, Error> {
        let games = GameRepository::new(self.db).get_all().await?;

        Ok(games.into_iter().map(GameDto::from).collect())
    }

    /// Deletes a game along with its holes, pins, courses and every setup targeting them
    ///
    /// # Returns
    /// - `Ok(true)` - Game was deleted
    /// - `Ok(false)` - Game did not exist
    pub async fn delete_game(&self, game_id: i32) -> Result<bool, Error> {
        let result = GameRepository::new(self.db).delete(game_id).await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(game_id = %game_id, "Deleted game");
        }

        Ok(deleted)
    }

    pub async fn create_hole(&self, game_id: i32, name: &str) -> Result<HoleDto, Error> {
        let name = validate::name(name)?;

        if GameRepository::new(self.db).get(game_id).await?.is_none() {
            return Err(ReferentialIntegrityError::not_found("Game", game_id).into());
        }

        let hole = HoleRepository::new(self.db).create(game_id, &name).await?;

        tracing::info!(hole_id = %hole.id, game_id = %game_id, "Created hole {}", hole.name);

        Ok(HoleDto {
            id: hole.id,
            game_id: hole.game_id,
            name: hole.name,
            pins: Vec::new(),
        })
    }

    /// Get a hole along with its pins
    pub async fn get_hole(&self, hole_id: i32) -> Result<Option<HoleDto>, Error> {
        let Some(hole) = HoleRepository::new(self.db).get(hole_id).await? else {
            return Ok(None);
        };

        let pins = PinRepository::new(self.db).get_by_hole(hole.id).await?;

        Ok(Some(HoleDto {
            id: hole.id,
            game_id: hole.game_id,
            name: hole.name,
            pins: pins.into_iter().map(PinDto::from).collect(),
        }))
    }

    /// Lists the game's holes with their pins, ordered by ID
    pub async fn list_holes(&self, game_id: i32) -> Result<Vec<HoleDto>, Error> {
        if GameRepository::new(self.db).get(game_id).await?.is_none() {
            return Err(ReferentialIntegrityError::not_found("Game", game_id).into());
        }

        let pin_repo = PinRepository::new(self.db);
        let holes = HoleRepository::new(self.db).get_by_game(game_id).await?;

        let mut hole_dtos = Vec::with_capacity(holes.len());
        for hole in holes {
            let pins = pin_repo.get_by_hole(hole.id).await?;
            hole_dtos.push(HoleDto {
                id: hole.id,
                game_id: hole.game_id,
                name: hole.name,
                pins: pins.into_iter().map(PinDto::from).collect(),
            });
        }

        Ok(hole_dtos)
    }

    /// Deletes a hole along with its pins and every setup targeting it
    ///
    /// The hole is removed from the hole order of every course playing it.
    pub async fn delete_hole(&self, hole_id: i32) -> Result<bool, Error> {
        let result = HoleRepository::new(self.db).delete(hole_id).await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(hole_id = %hole_id, "Deleted hole");
        }

        Ok(deleted)
    }

    pub async fn create_pin(&self, hole_id: i32, name: &str) -> Result<PinDto, Error> {
        let name = validate::name(name)?;

        if HoleRepository::new(self.db).get(hole_id).await?.is_none() {
            return Err(ReferentialIntegrityError::not_found("Hole", hole_id).into());
        }

        let pin = PinRepository::new(self.db).create(hole_id, &name).await?;

        tracing::info!(pin_id = %pin.id, hole_id = %hole_id, "Created pin {}", pin.name);

        Ok(pin.into())
    }

    pub async fn list_pins(&self, hole_id: i32) -> Result<Vec<PinDto>, Error> {
        if HoleRepository::new(self.db).get(hole_id).await?.is_none() {
            return Err(ReferentialIntegrityError::not_found("Hole", hole_id).into());
        }

        let pins = PinRepository::new(self.db).get_by_hole(hole_id).await?;

        Ok(pins.into_iter().map(PinDto::from).collect())
    }

    /// Deletes a pin along with every setup targeting it
    pub async fn delete_pin(&self, pin_id: i32) -> Result<bool, Error> {
        let result = PinRepository::new(self.db).delete(pin_id).await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(pin_id = %pin_id, "Deleted pin");
        }

        Ok(deleted)
    }

    /// Creates a course with its hole order and allowed wind speeds
    ///
    /// # Returns
    /// - `Ok(CourseDto)` - The created course
    /// - `Err(Error::ValidationError)` - Bad name, negative wind speed, or a repeated hole the
    ///   policy rejects
    /// - `Err(Error::IntegrityError)` - Game or a hole does not exist, or a hole belongs to
    ///   another game
    pub async fn create_course(
        &self,
        game_id: i32,
        name: &str,
        hole_order: &[i32],
        wind_speeds: &[i32],
    ) -> Result<CourseDto, Error> {
        let name = validate::name(name)?;
        for wind_speed in wind_speeds {
            validate::wind_speed(*wind_speed)?;
        }

        let txn = self.db.begin().await?;

        let game = GameRepository::new(&txn)
            .get(game_id)
            .await?
            .ok_or_else(|| ReferentialIntegrityError::not_found("Game", game_id))?;
        self.validate_hole_order(&txn, game_id, hole_order).await?;

        let course_repo = CourseRepository::new(&txn);
        let course = course_repo.create(game_id, &name).await?;
        course_repo.replace_hole_order(course.id, hole_order).await?;
        course_repo.replace_wind_speeds(course.id, wind_speeds).await?;

        let course = load_course(&txn, course, game).await?;

        txn.commit().await?;

        tracing::info!(course_id = %course.id, game_id = %game_id, "Created course {}", course.name);

        Ok(course)
    }

    pub async fn get_course(&self, course_id: i32) -> Result<Option<CourseDto>, Error> {
        let course_repo = CourseRepository::new(self.db);
        let Some((course, Some(game))) = course_repo.get_with_game(course_id).await? else {
            return Ok(None);
        };

        Ok(Some(load_course(self.db, course, game).await?))
    }

    /// Lists the game's courses ordered by ID
    pub async fn list_courses(&self, game_id: i32) -> Result<Vec<CourseDto>, Error> {
        let game = GameRepository::new(self.db)
            .get(game_id)
            .await?
            .ok_or_else(|| ReferentialIntegrityError::not_found("Game", game_id))?;

        let courses = CourseRepository::new(self.db).get_by_game(game_id).await?;

        let mut course_dtos = Vec::with_capacity(courses.len());
        for course in courses {
            course_dtos.push(load_course(self.db, course, game.clone()).await?);
        }

        Ok(course_dtos)
    }

    /// Deletes a course along with its hole order and wind speeds
    ///
    /// Holes and setups are kept; setups on holes no other course plays stop being
    /// constrained by wind speed.
    pub async fn delete_course(&self, course_id: i32) -> Result<bool, Error> {
        let result = CourseRepository::new(self.db).delete(course_id).await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(course_id = %course_id, "Deleted course");
        }

        Ok(deleted)
    }

    /// Replaces the course's hole order, validated as on creation
    pub async fn set_hole_order(
        &self,
        course_id: i32,
        hole_order: &[i32],
    ) -> Result<CourseDto, Error> {
        let txn = self.db.begin().await?;

        let course_repo = CourseRepository::new(&txn);
        let (course, game) = course_with_game(&course_repo, course_id).await?;

        self.validate_hole_order(&txn, course.game_id, hole_order)
            .await?;
        course_repo.replace_hole_order(course.id, hole_order).await?;
        let course = touch(&course_repo, course_id).await?;

        let course = load_course(&txn, course, game).await?;

        txn.commit().await?;

        tracing::info!(course_id = %course_id, holes = %hole_order.len(), "Replaced course hole order");

        Ok(course)
    }

    /// Replaces the course's allowed wind speeds, duplicates are collapsed
    pub async fn set_wind_speeds(
        &self,
        course_id: i32,
        wind_speeds: &[i32],
    ) -> Result<CourseDto, Error> {
        for wind_speed in wind_speeds {
            validate::wind_speed(*wind_speed)?;
        }

        let txn = self.db.begin().await?;

        let course_repo = CourseRepository::new(&txn);
        let (_, game) = course_with_game(&course_repo, course_id).await?;

        course_repo
            .replace_wind_speeds(course_id, wind_speeds)
            .await?;
        let course = touch(&course_repo, course_id).await?;

        let course = load_course(&txn, course, game).await?;

        txn.commit().await?;

        tracing::info!(course_id = %course_id, wind_speeds = ?course.wind_speeds, "Replaced course wind speeds");

        Ok(course)
    }

    /// Get the course's hole IDs exactly as stored
    pub async fn list_hole_order(&self, course_id: i32) -> Result<Vec<i32>, Error> {
        let course_repo = CourseRepository::new(self.db);
        if course_repo.get(course_id).await?.is_none() {
            return Err(ReferentialIntegrityError::not_found("Course", course_id).into());
        }

        Ok(course_repo.get_hole_order(course_id).await?)
    }

    /// Checks every hole exists and belongs to `game_id`, and repeats against the policy
    async fn validate_hole_order<C: ConnectionTrait>(
        &self,
        db: &C,
        game_id: i32,
        hole_order: &[i32],
    ) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for hole_id in hole_order {
            if !seen.insert(*hole_id) && !self.policy.allow_repeated_holes {
                return Err(ValidationError::RepeatedHole(*hole_id).into());
            }
        }

        let unique: Vec<i32> = seen.into_iter().collect();
        let holes = HoleRepository::new(db).get_many(&unique).await?;

        for hole_id in hole_order {
            let Some(hole) = holes.iter().find(|hole| hole.id == *hole_id) else {
                return Err(ReferentialIntegrityError::not_found("Hole", *hole_id).into());
            };

            if hole.game_id != game_id {
                return Err(ReferentialIntegrityError::HoleNotInGame {
                    hole_id: hole.id,
                    game_id,
                }
                .into());
            }
        }

        Ok(())
    }
}

async fn touch<C: ConnectionTrait>(
    course_repo: &CourseRepository<'_, C>,
    course_id: i32,
) -> Result<CourseModel, Error> {
    course_repo
        .touch(course_id)
        .await?
        .ok_or_else(|| ReferentialIntegrityError::not_found("Course", course_id).into())
}

/// Fetches a course along with its game
async fn course_with_game<C: ConnectionTrait>(
    course_repo: &CourseRepository<'_, C>,
    course_id: i32,
) -> Result<(CourseModel, GameModel), Error> {
    let (course, game) = course_repo
        .get_with_game(course_id)
        .await?
        .ok_or_else(|| ReferentialIntegrityError::not_found("Course", course_id))?;

    let game = game.ok_or_else(|| {
        // Course rows cannot outlive their game due to the cascading foreign key
        Error::InternalError(format!(
            "Failed to find game ID {} for course ID {}",
            course.game_id, course.id
        ))
    })?;

    Ok((course, game))
}

/// Assembles a [`CourseDto`] from the course row, its game, hole order and wind speeds
async fn load_course<C: ConnectionTrait>(
    db: &C,
    course: CourseModel,
    game: GameModel,
) -> Result<CourseDto, Error> {
    let course_repo = CourseRepository::new(db);

    let hole_order = course_repo.get_hole_order(course.id).await?;
    let wind_speeds = course_repo.get_wind_speeds(course.id).await?;

    Ok(CourseDto {
        id: course.id,
        game_id: course.game_id,
        game_name: game.name,
        name: course.name,
        hole_order,
        wind_speeds,
        created_at: course.created_at,
        updated_at: course.updated_at,
    })
}
