//! Member entity representing a registered account in the AbleToTrip system.

use std::fmt;

use att_shared::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::identity::AuthUser;
use crate::domain::value_objects::{Email, PasswordSecret, Profile, ProfileUpdate};
use crate::errors::{DomainResult, ValidationError};
use crate::services::password::{self, PasswordHasher};

/// Field that identifies a member at login
pub const USERNAME_FIELD: &str = "email";

/// Field holding the member's contact address
pub const EMAIL_FIELD: &str = "email";

/// Extra fields prompted for when creating a superuser interactively
pub const REQUIRED_FIELDS: &[&str] = &[];

/// Member account.
///
/// Accounts are meant to be created through
/// [`UserManager`](crate::services::UserManager), which normalizes the email,
/// hashes the password and persists the record. `is_staff` is not stored;
/// it is always derived from `is_admin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Normalized login email, unique per database
    pub email: Email,

    /// Hashed password; never serialized
    #[serde(skip, default)]
    password: PasswordSecret,

    /// Timestamp of the user's last successful login
    pub last_login: Option<DateTime<Utc>>,

    /// Whether the user may log in
    pub is_active: bool,

    /// Whether the user has administrative rights
    pub is_admin: bool,

    /// Free-form postal address
    pub address: Option<String>,

    pub longitude: Option<f64>,

    pub latitude: Option<f64>,
}

impl User {
    /// Creates a new active, non-admin user with an unusable password
    pub fn new(email: Email) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password: PasswordSecret::unusable(),
            last_login: None,
            is_active: true,
            is_admin: false,
            address: None,
            longitude: None,
            latitude: None,
        }
    }

    /// Rehydrates a previously persisted secret (storage adapters only)
    pub fn with_password_secret(mut self, secret: PasswordSecret) -> Self {
        self.password = secret;
        self
    }

    /// Staff access mirrors the admin flag
    pub fn is_staff(&self) -> bool {
        self.is_admin
    }

    pub fn username(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &PasswordSecret {
        &self.password
    }

    /// Hash and store `raw`; `None` stores an unusable password
    pub fn set_password<H>(&mut self, hasher: &H, raw: Option<&str>) -> DomainResult<()>
    where
        H: PasswordHasher + ?Sized,
    {
        self.password = password::make_password(hasher, raw)?;
        Ok(())
    }

    pub fn set_unusable_password(&mut self) {
        self.password = PasswordSecret::unusable();
    }

    pub fn has_usable_password(&self) -> bool {
        self.password.is_usable()
    }

    /// Verify `raw` against the stored secret
    pub fn check_password<H>(&self, hasher: &H, raw: &str) -> DomainResult<bool>
    where
        H: PasswordHasher + ?Sized,
    {
        password::check_password(hasher, raw, &self.password)
    }

    /// Every member is granted every permission.
    ///
    /// There is no granular permission model yet; anyone who reaches this
    /// check is fully authorized.
    pub fn has_perm(&self, _perm: &str, _obj: Option<&str>) -> bool {
        true
    }

    /// Every member may view every application module
    pub fn has_module_perms(&self, _app_label: &str) -> bool {
        true
    }

    /// Re-normalize the email in place
    pub fn clean(&mut self) -> Result<(), ValidationError> {
        self.email = Email::parse(self.email.as_str())?;
        Ok(())
    }

    /// Stamp the last login time
    pub fn record_login(&mut self) {
        self.last_login = Some(Utc::now());
    }

    pub fn profile(&self) -> Profile {
        Profile {
            address: self.address.clone(),
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }

    /// Replace address and coordinates with the given profile
    pub fn set_profile(&mut self, profile: Profile) -> Result<(), ValidationError> {
        profile.validate()?;
        self.address = profile.address;
        self.longitude = profile.longitude;
        self.latitude = profile.latitude;
        Ok(())
    }

    /// Apply the fields present in `update`; nothing changes on error
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), ValidationError> {
        let profile = self.profile().apply(update)?;
        self.set_profile(profile)
    }

    /// Both coordinates, when both are set
    pub fn location(&self) -> Option<Coordinate> {
        self.profile().location()
    }

    /// Set or clear both coordinates at once
    pub fn set_location(&mut self, location: Option<Coordinate>) {
        self.latitude = location.map(|c| c.latitude);
        self.longitude = location.map(|c| c.longitude);
    }

    /// Distance in meters from the member's location to `point`
    pub fn distance_to(&self, point: &Coordinate) -> Option<f64> {
        self.location().map(|here| here.distance_to(point))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.email.as_str())
    }
}

impl AuthUser for User {
    fn username_field(&self) -> &'static str {
        USERNAME_FIELD
    }

    fn username(&self) -> &str {
        User::username(self)
    }

    fn password_secret(&self) -> &PasswordSecret {
        &self.password
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_staff(&self) -> bool {
        User::is_staff(self)
    }

    fn has_perm(&self, perm: &str, obj: Option<&str>) -> bool {
        User::has_perm(self, perm, obj)
    }

    fn has_module_perms(&self, app_label: &str) -> bool {
        User::has_module_perms(self, app_label)
    }
}
