//! Validated user handles.

use std::fmt;

use crate::server::error::validation::ValidationError;

/// Maximum length of a handle.
pub const MAX_HANDLE_LEN: usize = 32;

/// A user handle: 1 to 32 characters from `[a-z0-9]`.
///
/// Invalid handles cannot be constructed, so anything holding a `Handle` may insert it as-is.
///
/// ```
/// use caddie::server::model::handle::Handle;
///
/// assert!(Handle::parse("ace42").is_ok());
/// assert!(Handle::parse("Ace 42").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let valid = !value.is_empty()
            && value.len() <= MAX_HANDLE_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());

        if !valid {
            return Err(ValidationError::InvalidHandle(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;

    /// Expect lowercase letters and digits to be accepted
    #[test]
    fn accepts_lowercase_alphanumeric() {
        for handle in ["a", "golfer", "ace42", "0", "abcdefghijklmnopqrstuvwxyz012345"] {
            assert!(Handle::parse(handle).is_ok(), "{handle} should be valid");
        }
    }

    /// Expect uppercase, punctuation, whitespace, non-ASCII and empty handles to be rejected
    #[test]
    fn rejects_invalid_characters() {
        for handle in [
            "", "Golfer", "ace_42", "ace-42", "ace 42", " ace", "ace\n", "ace.", "café", "ACE",
        ] {
            assert!(Handle::parse(handle).is_err(), "{handle:?} should be invalid");
        }
    }

    /// Expect handles longer than 32 characters to be rejected
    #[test]
    fn rejects_long_handles() {
        let handle = "a".repeat(33);

        assert!(Handle::parse(&handle).is_err());
    }
}
