use super::*;
use time::macros::datetime;

// =============================================================
// Validation
// =============================================================

#[test]
fn all_fields_are_required() {
    let message = Err("All fields are required".to_owned());
    assert_eq!(validate_new_user("", "a@b.c", "longenough"), message);
    assert_eq!(validate_new_user("Ann", "", "longenough"), message);
    assert_eq!(validate_new_user("Ann", "a@b.c", ""), message);
    assert_eq!(validate_new_user("   ", "a@b.c", "longenough"), message);
}

#[test]
fn seven_char_password_fails_before_any_backend_call() {
    assert_eq!(
        validate_new_user("Ann", "ann@example.com", "seven77"),
        Err("Password must be at least 8 characters".to_owned())
    );
}

#[test]
fn eight_char_password_passes() {
    assert_eq!(validate_new_user("Ann", "ann@example.com", "eight888"), Ok(()));
}

#[test]
fn missing_fields_are_reported_before_password_length() {
    assert_eq!(validate_new_user("", "", "x"), Err("All fields are required".to_owned()));
}

// =============================================================
// Provisioned profile document
// =============================================================

#[test]
fn provisioned_profile_is_active_non_admin_and_attributed() {
    let now = datetime!(2025-07-01 09:00 UTC);
    let profile = provisioned_profile("u7", "Ann", "ann@example.com", "team@irislab.com", now);
    assert_eq!(profile.id, "u7");
    assert_eq!(profile.status, UserStatus::Active);
    assert!(!profile.is_admin);
    assert_eq!(profile.modified_by, "team@irislab.com");
    assert_eq!(profile.created_at, Some(now));
    assert_eq!(profile.last_modified, Some(now));
}
