//! Optional profile and location fields editable by the member.

use att_shared::validation::max_chars;
use att_shared::Coordinate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Maximum length of the address field, in characters
pub const ADDRESS_MAX_LENGTH: usize = 255;

/// Address and geolocation of a member; every field is independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub address: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.latitude = Some(location.latitude);
        self.longitude = Some(location.longitude);
        self
    }

    /// Both coordinates, when both are present
    pub fn location(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(address) = &self.address {
            if !max_chars(address, ADDRESS_MAX_LENGTH) {
                return Err(ValidationError::InvalidLength {
                    field: "address".to_string(),
                    max: ADDRESS_MAX_LENGTH,
                    actual: address.chars().count(),
                });
            }
        }
        Ok(())
    }
}

/// Partial profile edit; `None` leaves a field as it is
///
/// An address that is blank after trimming clears the stored address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub address: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.longitude.is_none() && self.latitude.is_none()
    }
}

impl Profile {
    /// Profile with `update` applied, validated
    pub fn apply(&self, update: ProfileUpdate) -> Result<Profile, ValidationError> {
        let address = match update.address {
            Some(address) if address.trim().is_empty() => None,
            Some(address) => Some(address.trim().to_string()),
            None => self.address.clone(),
        };
        let profile = Profile {
            address,
            longitude: update.longitude.or(self.longitude),
            latitude: update.latitude.or(self.latitude),
        };
        profile.validate()?;
        Ok(profile)
    }
}
