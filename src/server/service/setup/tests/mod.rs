use caddie_test_utils::prelude::*;

use crate::{
    model::setup::{Objective, SetupFields},
    server::model::situation::Situation,
};


/// Fields for a `score` setup on the mock situation's first pin at `wind_speed`
fn fields(name: &str, situation: &MockSituation, wind_speed: i32) -> SetupFields {
    SetupFields::new(
        name,
        Situation::new(situation.hole.id, wind_speed, situation.pin.id),
        Objective::Score,
    )
}
