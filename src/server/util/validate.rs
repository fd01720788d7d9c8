//! Field validation helpers.
//!
//! These check single values in isolation; checks that need stored data (wind speeds allowed on
//! a course, pins belonging to holes) live in the services.

use url::Url;

use crate::server::error::validation::ValidationError;

/// Maximum length of any entity name.
pub const MAX_NAME_LEN: usize = 63;

/// Maximum length of a setup's descriptive text.
pub const MAX_TEXT_LEN: usize = 255;

/// Trims `name` and checks it is non-empty and at most [`MAX_NAME_LEN`] characters.
///
/// Returns the trimmed name which is what gets stored.
pub fn name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            name: trimmed.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(trimmed.to_string())
}

pub fn text(text: Option<&str>) -> Result<(), ValidationError> {
    match text {
        Some(text) if text.chars().count() > MAX_TEXT_LEN => {
            Err(ValidationError::TextTooLong { max: MAX_TEXT_LEN })
        }
        _ => Ok(()),
    }
}

/// Accepts absent URLs and absolute `http`/`https` URLs.
pub fn media_url(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}

pub fn time_ms(time_ms: Option<i32>) -> Result<(), ValidationError> {
    match time_ms {
        Some(time) if time < 0 => Err(ValidationError::NegativeTime(time)),
        _ => Ok(()),
    }
}

pub fn wind_speed(wind_speed: i32) -> Result<(), ValidationError> {
    if wind_speed < 0 {
        return Err(ValidationError::NegativeWindSpeed(wind_speed));
    }

    Ok(())
}
