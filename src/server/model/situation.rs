use serde::{Deserialize, Serialize};

use crate::server::model::db::SetupModel;

/// A concrete game situation: the hole being played, the wind speed, and the pin placement.
///
/// Setups target exactly one situation and sheets are resolved against one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Situation {
    pub hole_id: i32,
    pub wind_speed: i32,
    pub pin_id: i32,
}

impl Situation {
    pub fn new(hole_id: i32, wind_speed: i32, pin_id: i32) -> Self {
        Self {
            hole_id,
            wind_speed,
            pin_id,
        }
    }

    /// Returns true if `setup` targets exactly this situation.
    pub fn matches(&self, setup: &SetupModel) -> bool {
        setup.hole_id == self.hole_id
            && setup.pin_id == self.pin_id
            && setup.wind_speed == self.wind_speed
    }
}

impl From<&SetupModel> for Situation {
    fn from(setup: &SetupModel) -> Self {
        Self::new(setup.hole_id, setup.wind_speed, setup.pin_id)
    }
}
