use crate::server::{error::config::ConfigError, model::policy::HoleOrderPolicy};

pub struct Config {
    pub database_url: String,
    pub log_level: String,
    pub allow_repeated_holes: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            allow_repeated_holes: optional_bool("ALLOW_REPEATED_HOLES")?.unwrap_or(false),
        })
    }

    /// Hole order validation policy derived from `ALLOW_REPEATED_HOLES`.
    pub fn hole_order_policy(&self) -> HoleOrderPolicy {
        HoleOrderPolicy {
            allow_repeated_holes: self.allow_repeated_holes,
        }
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_bool(var: &str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(var) {
        Err(_) => Ok(None),
        Ok(value) => parse_bool(&value).map(Some).ok_or_else(|| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected true or false, got {:?}", value),
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    /// Expect common boolean spellings to parse regardless of case
    #[test]
    fn parses_boolean_spellings() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" YES "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("False"), Some(false));
    }

    /// Expect None for values that are not booleans
    #[test]
    fn rejects_non_boolean_values() {
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }
}
