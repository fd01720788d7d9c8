//! Factory functions for in-memory models.
//!
//! These build models with standard test values without touching the database, for unit
//! tests of pure logic such as layer resolution.

use chrono::Utc;
use entity::sea_orm_active_enums::Objective;

/// Create a mock setup model targeting the situation (hole, wind speed, pin).
pub fn mock_setup_model(id: i32, hole_id: i32, wind_speed: i32, pin_id: i32) -> entity::setup::Model {
    let now = Utc::now().naive_utc();
    entity::setup::Model {
        id,
        creator_id: 1,
        name: format!("Setup {}", id),
        game_id: 1,
        hole_id,
        pin_id,
        wind_speed,
        objective: Objective::Score,
        text: None,
        image_url: None,
        video_url: None,
        time_ms: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock layer model at `position` of sheet 1.
pub fn mock_layer_model(
    id: i32,
    group_id: i32,
    enabled: bool,
    position: i32,
) -> entity::setup_sheet_layer::Model {
    let now = Utc::now().naive_utc();
    entity::setup_sheet_layer::Model {
        id,
        sheet_id: 1,
        group_id,
        enabled,
        position,
        created_at: now,
        updated_at: now,
    }
}
