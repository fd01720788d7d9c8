use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::game::Model> for GameDto {
    fn from(game: entity::game::Model) -> Self {
        Self {
            id: game.id,
            name: game.name,
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinDto {
    pub id: i32,
    pub hole_id: i32,
    pub name: String,
}

impl From<entity::pin::Model> for PinDto {
    fn from(pin: entity::pin::Model) -> Self {
        Self {
            id: pin.id,
            hole_id: pin.hole_id,
            name: pin.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleDto {
    pub id: i32,
    pub game_id: i32,
    pub name: String,
    pub pins: Vec<PinDto>,
}

/// A course with its hole order and allowed wind speeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDto {
    pub id: i32,
    pub game_id: i32,
    pub game_name: String,
    pub name: String,
    /// Hole IDs in play order, repeats allowed when the hole order policy permits them.
    pub hole_order: Vec<i32>,
    /// Allowed wind speeds, ascending.
    pub wind_speeds: Vec<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
