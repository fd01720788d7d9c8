use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a course without holes or wind speeds
    pub async fn create(&self, game_id: i32, name: &str) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let course = entity::course::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        course.insert(self.db).await
    }

    pub async fn get(&self, course_id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await
    }

    /// Get a course along with the game it belongs to
    pub async fn get_with_game(
        &self,
        course_id: i32,
    ) -> Result<Option<(entity::course::Model, Option<entity::game::Model>)>, DbErr> {
        entity::prelude::Course::find_by_id(course_id)
            .find_also_related(entity::game::Entity)
            .one(self.db)
            .await
    }

    pub async fn get_by_game(&self, game_id: i32) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::GameId.eq(game_id))
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await
    }

    /// Bumps the course's `updated_at` timestamp
    ///
    /// Returns `Ok(None)` if the course does not exist.
    pub async fn touch(&self, course_id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        let Some(course) = self.get(course_id).await? else {
            return Ok(None);
        };

        let mut course_am = course.into_active_model();
        course_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(course_am.update(self.db).await?))
    }

    /// Deletes a course along with its hole order and wind speeds
    pub async fn delete(&self, course_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Course::delete_by_id(course_id)
            .exec(self.db)
            .await
    }

    /// Get the course's hole IDs in play order
    pub async fn get_hole_order(&self, course_id: i32) -> Result<Vec<i32>, DbErr> {
        let entries = entity::prelude::CourseHole::find()
            .filter(entity::course_hole::Column::CourseId.eq(course_id))
            .order_by_asc(entity::course_hole::Column::Position)
            .order_by_asc(entity::course_hole::Column::Id)
            .all(self.db)
            .await?;

        Ok(entries.into_iter().map(|entry| entry.hole_id).collect())
    }

    /// Replaces the course's hole order with `hole_ids`, stored verbatim
    ///
    /// Should be run inside a transaction so readers never observe a partially written order.
    pub async fn replace_hole_order(&self, course_id: i32, hole_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::CourseHole::delete_many()
            .filter(entity::course_hole::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        if hole_ids.is_empty() {
            return Ok(());
        }

        let entries = hole_ids
            .iter()
            .enumerate()
            .map(|(position, hole_id)| entity::course_hole::ActiveModel {
                course_id: ActiveValue::Set(course_id),
                hole_id: ActiveValue::Set(*hole_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            });

        entity::prelude::CourseHole::insert_many(entries)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Get the course's allowed wind speeds in ascending order
    pub async fn get_wind_speeds(&self, course_id: i32) -> Result<Vec<i32>, DbErr> {
        let entries = entity::prelude::CourseWindSpeed::find()
            .filter(entity::course_wind_speed::Column::CourseId.eq(course_id))
            .order_by_asc(entity::course_wind_speed::Column::WindSpeed)
            .all(self.db)
            .await?;

        Ok(entries.into_iter().map(|entry| entry.wind_speed).collect())
    }

    /// Replaces the course's allowed wind speeds, duplicates are collapsed
    pub async fn replace_wind_speeds(
        &self,
        course_id: i32,
        wind_speeds: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::CourseWindSpeed::delete_many()
            .filter(entity::course_wind_speed::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        let unique: BTreeSet<i32> = wind_speeds.iter().copied().collect();
        if unique.is_empty() {
            return Ok(());
        }

        let entries = unique
            .into_iter()
            .map(|wind_speed| entity::course_wind_speed::ActiveModel {
                course_id: ActiveValue::Set(course_id),
                wind_speed: ActiveValue::Set(wind_speed),
            });

        entity::prelude::CourseWindSpeed::insert_many(entries)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Get the wind speeds allowed for a hole across every course that plays it
    ///
    /// Returns `Ok(None)` when no course includes the hole, otherwise the ascending union of
    /// the allowed wind speeds of those courses.
    pub async fn get_wind_speeds_for_hole(&self, hole_id: i32) -> Result<Option<Vec<i32>>, DbErr> {
        let course_ids: BTreeSet<i32> = entity::prelude::CourseHole::find()
            .filter(entity::course_hole::Column::HoleId.eq(hole_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entry| entry.course_id)
            .collect();

        if course_ids.is_empty() {
            return Ok(None);
        }

        let wind_speeds: BTreeSet<i32> = entity::prelude::CourseWindSpeed::find()
            .filter(entity::course_wind_speed::Column::CourseId.is_in(course_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entry| entry.wind_speed)
            .collect();

        Ok(Some(wind_speeds.into_iter().collect()))
    }
}
