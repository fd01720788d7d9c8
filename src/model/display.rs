//! Human readable names for every stored entity.
//!
//! Each variant states where its name comes from instead of probing for whichever field
//! happens to be present: users show their handle, courses show their game alongside their
//! own name, everything else shows its name. Blank names fall back to `"(no name)"`.

use crate::model::{
    geometry::{CourseDto, GameDto, HoleDto, PinDto},
    setup::SetupDto,
    sheet::{SetupGroupDto, SetupSheetDto},
    user::UserDto,
};

const NO_NAME: &str = "(no name)";

pub trait DisplayName {
    fn display_name(&self) -> String;
}

fn or_no_name(name: &str) -> String {
    if name.trim().is_empty() {
        NO_NAME.to_string()
    } else {
        name.to_string()
    }
}

impl DisplayName for entity::caddie_user::Model {
    fn display_name(&self) -> String {
        or_no_name(&self.handle)
    }
}

impl DisplayName for UserDto {
    fn display_name(&self) -> String {
        or_no_name(&self.handle)
    }
}

impl DisplayName for CourseDto {
    fn display_name(&self) -> String {
        format!("{} ({})", or_no_name(&self.game_name), or_no_name(&self.name))
    }
}

macro_rules! display_name_from_name {
    ($($model:ty),+ $(,)?) => {
        $(
            impl DisplayName for $model {
                fn display_name(&self) -> String {
                    or_no_name(&self.name)
                }
            }
        )+
    };
}

display_name_from_name!(
    entity::game::Model,
    entity::hole::Model,
    entity::pin::Model,
    entity::setup::Model,
    entity::setup_group::Model,
    entity::setup_sheet::Model,
    GameDto,
    HoleDto,
    PinDto,
    SetupDto,
    SetupGroupDto,
    SetupSheetDto,
);

#[cfg(test)]
mod tests {
    use caddie_test_utils::prelude::*;
    use chrono::Utc;

    use crate::model::{display::DisplayName, geometry::CourseDto};

    /// Expect courses to be named after their game and themselves
    #[test]
    fn course_includes_game_name() {
        let now = Utc::now().naive_utc();
        let course = CourseDto {
            id: 1,
            game_id: 1,
            game_name: "Golf".to_string(),
            name: "Lakeside".to_string(),
            hole_order: vec![],
            wind_speeds: vec![],
            created_at: now,
            updated_at: now,
        };

        assert_eq!(course.display_name(), "Golf (Lakeside)");
    }

    /// Expect users to be named by handle
    #[test]
    fn user_uses_handle() {
        let now = Utc::now().naive_utc();
        let user = entity::caddie_user::Model {
            id: 1,
            handle: "golfer".to_string(),
            verified: false,
            trusted: false,
            admin: false,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(user.display_name(), "golfer");
    }

    /// Expect named entities to use their name, falling back for blank names
    #[test]
    fn named_entities_fall_back_when_blank() {
        let mut setup = factory::mock_setup_model(1, 1, 0, 1);
        assert_eq!(setup.display_name(), "Setup 1");

        setup.name = "  ".to_string();
        assert_eq!(setup.display_name(), "(no name)");
    }
}
