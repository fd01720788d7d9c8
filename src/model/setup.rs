use chrono::NaiveDateTime;
pub use entity::sea_orm_active_enums::Objective;
use serde::{Deserialize, Serialize};

use crate::server::model::situation::Situation;

/// Caller-provided fields of a setup, used for both creation and full updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupFields {
    pub name: String,
    pub hole_id: i32,
    pub pin_id: i32,
    pub wind_speed: i32,
    pub objective: Objective,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    /// Time in milliseconds.
    pub time_ms: Option<i32>,
}

impl SetupFields {
    /// Fields for a setup targeting `situation` with no description or media.
    pub fn new(name: impl Into<String>, situation: Situation, objective: Objective) -> Self {
        Self {
            name: name.into(),
            hole_id: situation.hole_id,
            pin_id: situation.pin_id,
            wind_speed: situation.wind_speed,
            objective,
            text: None,
            image_url: None,
            video_url: None,
            time_ms: None,
        }
    }

    pub fn situation(&self) -> Situation {
        Situation::new(self.hole_id, self.wind_speed, self.pin_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupDto {
    pub id: i32,
    pub creator_id: i32,
    pub name: String,
    pub game_id: i32,
    pub hole_id: i32,
    pub pin_id: i32,
    pub wind_speed: i32,
    pub objective: Objective,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub time_ms: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::setup::Model> for SetupDto {
    fn from(setup: entity::setup::Model) -> Self {
        Self {
            id: setup.id,
            creator_id: setup.creator_id,
            name: setup.name,
            game_id: setup.game_id,
            hole_id: setup.hole_id,
            pin_id: setup.pin_id,
            wind_speed: setup.wind_speed,
            objective: setup.objective,
            text: setup.text,
            image_url: setup.image_url,
            video_url: setup.video_url,
            time_ms: setup.time_ms,
            created_at: setup.created_at,
            updated_at: setup.updated_at,
        }
    }
}
