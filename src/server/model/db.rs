//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models generated in the `entity` crate, giving a single
//! point of reference for model types used throughout the services.

/// Type alias for a Caddie user.
///
/// # Fields (from `entity::caddie_user::Model`)
/// - `id` - Primary key
/// - `handle` - Unique lowercase alphanumeric handle
/// - `verified`, `trusted`, `admin` - Capability flags, opaque to the core
/// - `created_at`, `updated_at` - Record timestamps
pub type UserModel = entity::caddie_user::Model;

pub type GameModel = entity::game::Model;

/// Type alias for a course.
///
/// The course row itself only holds the name; hole order lives in `course_hole` rows ordered
/// by `position` and the allowed wind speeds in `course_wind_speed` rows.
pub type CourseModel = entity::course::Model;

/// Type alias for a setup.
///
/// # Fields (from `entity::setup::Model`)
/// - `creator_id`, `name` - Owner and a name unique per owner
/// - `game_id` - Always the game of `hole_id`
/// - `hole_id`, `pin_id`, `wind_speed` - The situation this setup targets
/// - `objective` - Either `score` or `speed`
/// - `text`, `image_url`, `video_url`, `time_ms` - Optional description and media
pub type SetupModel = entity::setup::Model;

pub type SetupGroupModel = entity::setup_group::Model;

pub type SetupSheetModel = entity::setup_sheet::Model;

/// Type alias for a setup sheet layer.
///
/// `position` orders layers within the sheet (lowest first). `group_id` may refer to a group
/// that has since been deleted; such a layer is dangling and ignored by resolution.
pub type SetupSheetLayerModel = entity::setup_sheet_layer::Model;
