use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Wind speeds allowed on the course created by [`GeometryFixtures::insert_situation`].
pub const MOCK_WIND_SPEEDS: [i32; 3] = [0, 5, 10];

/// A game with one course containing one hole that has two pins.
pub struct MockSituation {
    pub game: entity::game::Model,
    pub course: entity::course::Model,
    pub hole: entity::hole::Model,
    pub pin: entity::pin::Model,
    pub other_pin: entity::pin::Model,
}

pub struct GeometryFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GeometryFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_game(&self, name: &str) -> Result<entity::game::Model, TestError> {
        let now = Utc::now().naive_utc();
        let game = entity::game::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(game.insert(self.db).await?)
    }

    pub async fn insert_hole(
        &self,
        game_id: i32,
        name: &str,
    ) -> Result<entity::hole::Model, TestError> {
        let now = Utc::now().naive_utc();
        let hole = entity::hole::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(hole.insert(self.db).await?)
    }

    pub async fn insert_pin(&self, hole_id: i32, name: &str) -> Result<entity::pin::Model, TestError> {
        let now = Utc::now().naive_utc();
        let pin = entity::pin::ActiveModel {
            hole_id: ActiveValue::Set(hole_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(pin.insert(self.db).await?)
    }

    /// Insert a course with the provided hole order and wind speeds.
    ///
    /// Holes are stored in the given order without checking they belong to `game_id`.
    pub async fn insert_course(
        &self,
        game_id: i32,
        name: &str,
        hole_ids: &[i32],
        wind_speeds: &[i32],
    ) -> Result<entity::course::Model, TestError> {
        let now = Utc::now().naive_utc();
        let course = entity::course::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, hole_id) in hole_ids.iter().enumerate() {
            entity::course_hole::ActiveModel {
                course_id: ActiveValue::Set(course.id),
                hole_id: ActiveValue::Set(*hole_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for wind_speed in wind_speeds {
            entity::course_wind_speed::ActiveModel {
                course_id: ActiveValue::Set(course.id),
                wind_speed: ActiveValue::Set(*wind_speed),
            }
            .insert(self.db)
            .await?;
        }

        Ok(course)
    }

    /// Insert a game "Golf", course "Lakeside" allowing [`MOCK_WIND_SPEEDS`], hole "L1" with
    /// pins "A" and "B".
    pub async fn insert_situation(&self) -> Result<MockSituation, TestError> {
        let game = self.insert_game("Golf").await?;
        let hole = self.insert_hole(game.id, "L1").await?;
        let pin = self.insert_pin(hole.id, "A").await?;
        let other_pin = self.insert_pin(hole.id, "B").await?;
        let course = self
            .insert_course(game.id, "Lakeside", &[hole.id], &MOCK_WIND_SPEEDS)
            .await?;

        Ok(MockSituation {
            game,
            course,
            hole,
            pin,
            other_pin,
        })
    }
}
