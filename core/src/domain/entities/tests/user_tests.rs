//! Unit tests for user entity

use att_shared::Coordinate;

use crate::domain::entities::user::{User, USERNAME_FIELD};
use crate::domain::identity::AuthUser;
use crate::domain::value_objects::{Email, Profile, ProfileUpdate};
use crate::services::password::test_support::{FailingHasher, PlainTextHasher};

fn user(email: &str) -> User {
    User::new(Email::parse(email).unwrap())
}

#[test]
fn test_new_user_defaults() {
    let user = user("traveler@abletotrip.com");

    assert_eq!(user.email.as_str(), "traveler@abletotrip.com");
    assert!(user.is_active);
    assert!(!user.is_admin);
    assert!(!user.is_staff());
    assert!(!user.has_usable_password());
    assert!(user.last_login.is_none());
    assert!(user.address.is_none());
    assert!(user.longitude.is_none());
    assert!(user.latitude.is_none());
}

#[test]
fn test_is_staff_mirrors_is_admin() {
    let mut user = user("admin@abletotrip.com");

    user.is_admin = true;
    assert!(user.is_staff());
    user.is_admin = false;
    assert!(!user.is_staff());
}

#[test]
fn test_display_is_email() {
    let user = user("Someone@Example.COM");
    assert_eq!(user.to_string(), "Someone@example.com");
    assert_eq!(user.to_string(), user.email.as_str());
}

#[test]
fn test_permissions_always_granted() {
    let mut user = user("member@abletotrip.com");
    user.is_active = false;

    assert!(user.has_perm("member.delete_user", None));
    assert!(user.has_perm("", Some("object-1")));
    assert!(user.has_module_perms("member"));
    assert!(user.has_module_perms("anything"));
}

#[test]
fn test_auth_user_contract() {
    let user = user("contract@abletotrip.com");
    let subject: &dyn AuthUser = &user;

    assert_eq!(subject.username_field(), USERNAME_FIELD);
    assert_eq!(subject.username(), "contract@abletotrip.com");
    assert!(subject.is_active());
    assert!(!subject.is_staff());
    assert!(subject.is_authenticated());
    assert!(!subject.is_anonymous());
    assert!(subject.has_perm("x", None));
    assert!(subject.has_module_perms("x"));
    assert!(!subject.password_secret().is_usable());
}

#[test]
fn test_set_and_check_password() {
    let hasher = PlainTextHasher;
    let mut user = user("pw@abletotrip.com");

    user.set_password(&hasher, Some("s3cret")).unwrap();
    assert!(user.has_usable_password());
    assert_ne!(user.password().as_encoded(), "s3cret");
    assert!(user.check_password(&hasher, "s3cret").unwrap());
    assert!(!user.check_password(&hasher, "wrong").unwrap());
}

#[test]
fn test_set_password_none_is_unusable() {
    let hasher = PlainTextHasher;
    let mut user = user("nopw@abletotrip.com");

    user.set_password(&hasher, None).unwrap();
    assert!(!user.has_usable_password());
    assert!(!user.check_password(&hasher, "").unwrap());
    assert!(!user.check_password(&hasher, user.password().as_encoded()).unwrap());
}

#[test]
fn test_set_unusable_password() {
    let hasher = PlainTextHasher;
    let mut user = user("reset@abletotrip.com");
    user.set_password(&hasher, Some("before")).unwrap();

    user.set_unusable_password();
    assert!(!user.has_usable_password());
    assert!(!user.check_password(&hasher, "before").unwrap());
}

#[test]
fn test_hashing_failure_keeps_previous_secret() {
    let mut user = user("fail@abletotrip.com");
    user.set_password(&PlainTextHasher, Some("kept")).unwrap();

    assert!(user.set_password(&FailingHasher, Some("new")).is_err());
    assert!(user.check_password(&PlainTextHasher, "kept").unwrap());
}

#[test]
fn test_profile_round_trip() {
    let mut user = user("profile@abletotrip.com");
    let profile = Profile {
        address: Some("서울특별시 중구 세종대로 110".to_string()),
        longitude: Some(126.9780),
        latitude: None,
    };

    user.set_profile(profile.clone()).unwrap();
    assert_eq!(user.profile(), profile);
    assert_eq!(user.longitude, Some(126.9780));
    assert!(user.latitude.is_none());
    assert!(user.location().is_none());
}

#[test]
fn test_set_profile_rejects_long_address() {
    let mut user = user("long@abletotrip.com");
    let result = user.set_profile(Profile::new().with_address("x".repeat(300)));

    assert!(result.is_err());
    assert!(user.address.is_none());
}

#[test]
fn test_update_profile_keeps_untouched_fields() {
    let mut user = user("edit@abletotrip.com");
    user.set_location(Some(Coordinate::new(37.5665, 126.9780)));

    user.update_profile(ProfileUpdate {
        address: Some("Jeju".to_string()),
        ..ProfileUpdate::default()
    })
    .unwrap();
    assert_eq!(user.address.as_deref(), Some("Jeju"));
    assert_eq!(user.latitude, Some(37.5665));

    let result = user.update_profile(ProfileUpdate {
        address: Some("y".repeat(256)),
        longitude: Some(0.0),
        ..ProfileUpdate::default()
    });
    assert!(result.is_err());
    assert_eq!(user.address.as_deref(), Some("Jeju"));
    assert_eq!(user.longitude, Some(126.9780));
}

#[test]
fn test_location_and_distance() {
    let mut user = user("geo@abletotrip.com");
    assert!(user.distance_to(&Coordinate::new(0.0, 0.0)).is_none());

    let seoul = Coordinate::new(37.5665, 126.9780);
    user.set_location(Some(seoul));
    assert_eq!(user.location(), Some(seoul));
    assert!(user.distance_to(&seoul).unwrap() < 1.0);

    user.set_location(None);
    assert!(user.latitude.is_none());
    assert!(user.longitude.is_none());
}

#[test]
fn test_record_login() {
    let mut user = user("login@abletotrip.com");
    user.record_login();
    assert!(user.last_login.is_some());
}

#[test]
fn test_clean_is_stable_for_normalized_email() {
    let mut user = user("Clean@Example.Com");
    user.clean().unwrap();
    assert_eq!(user.email.as_str(), "Clean@example.com");
}

#[test]
fn test_serialization_omits_password() {
    let mut user = user("json@abletotrip.com");
    user.set_password(&PlainTextHasher, Some("hidden")).unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["email"], "json@abletotrip.com");
    assert_eq!(json["is_active"], true);
    assert!(json["address"].is_null());

    let back: User = serde_json::from_value(json).unwrap();
    assert_eq!(back.id, user.id);
    assert!(!back.has_usable_password());
}
