use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Handle {0:?} must be 1 to 32 lowercase letters or digits")]
    InvalidHandle(String),
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Name {name:?} is longer than {max} characters")]
    NameTooLong { name: String, max: usize },
    #[error("Text is longer than {max} characters")]
    TextTooLong { max: usize },
    #[error("{field} {value:?} is not an absolute http(s) URL")]
    InvalidUrl { field: &'static str, value: String },
    #[error("Time {0:?} ms must not be negative")]
    NegativeTime(i32),
    #[error("Wind speed {0:?} must not be negative")]
    NegativeWindSpeed(i32),
    #[error("Wind speed {wind_speed:?} is not allowed on any course containing hole ID {hole_id:?}, allowed: {allowed:?}")]
    WindSpeedNotAllowed {
        hole_id: i32,
        wind_speed: i32,
        allowed: Vec<i32>,
    },
    #[error("Hole ID {0:?} appears more than once in the course hole order")]
    RepeatedHole(i32),
}
