//! Capability interface consumed by authentication code.
//!
//! Anything that logs in implements [`AuthUser`]; callers such as session or
//! admin authorization layers only see this trait, never the concrete record.

use crate::domain::value_objects::PasswordSecret;

/// Authentication hooks a member record exposes
pub trait AuthUser: Send + Sync {
    /// Name of the identifying field
    fn username_field(&self) -> &'static str;

    /// Value of the identifying field
    fn username(&self) -> &str;

    fn password_secret(&self) -> &PasswordSecret;

    /// Whether login is permitted
    fn is_active(&self) -> bool;

    /// Whether administrative UI access is granted
    fn is_staff(&self) -> bool;

    fn has_perm(&self, perm: &str, obj: Option<&str>) -> bool;

    fn has_module_perms(&self, app_label: &str) -> bool;

    fn is_authenticated(&self) -> bool {
        true
    }

    fn is_anonymous(&self) -> bool {
        false
    }
}
