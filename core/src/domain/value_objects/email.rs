//! Normalized email address used as the member's login identifier.

use std::fmt;

use att_shared::email::{normalize_email, EMAIL_MAX_LENGTH};
use att_shared::validation::not_empty;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Email address in normalized form.
///
/// The only way to obtain one is [`Email::parse`], so a value of this type is
/// always non-empty, at most 255 characters, and has a lower-cased domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Field name reported in validation errors
    pub const FIELD: &'static str = "email";

    /// Normalize and validate a raw email address
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_email(raw);
        if !not_empty(&normalized) {
            return Err(ValidationError::required(Self::FIELD));
        }

        let length = normalized.chars().count();
        if length > EMAIL_MAX_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: Self::FIELD.to_string(),
                max: EMAIL_MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part (after the last `@`), if any
    pub fn domain(&self) -> Option<&str> {
        self.0.rsplit_once('@').map(|(_, domain)| domain)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
