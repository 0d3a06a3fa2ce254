use super::*;
use time::macros::datetime;

#[test]
fn status_flips_both_ways() {
    assert_eq!(UserStatus::Active.flipped(), UserStatus::Inactive);
    assert_eq!(UserStatus::Inactive.flipped(), UserStatus::Active);
}

#[test]
fn status_labels_match_the_wire_and_display_forms() {
    assert_eq!(UserStatus::Active.label(), "active");
    assert_eq!(UserStatus::Inactive.display_label(), "Inactive");
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&UserStatus::Active).ok().as_deref(), Some("\"active\""));
    assert_eq!(serde_json::to_string(&UserStatus::Inactive).ok().as_deref(), Some("\"inactive\""));
}

#[test]
fn profile_round_trips_camel_case_fields() {
    let raw = r#"{
        "id": "u1",
        "name": "Ann",
        "email": "ann@example.com",
        "status": "active",
        "isAdmin": false,
        "createdAt": "2025-03-14T09:30:00Z",
        "lastModified": "2025-04-01T10:00:00Z",
        "modifiedBy": "team@irislab.com"
    }"#;
    let profile: UserProfile = serde_json::from_str(raw).expect("profile should parse");
    assert_eq!(profile.id, "u1");
    assert!(!profile.is_admin);
    assert_eq!(profile.created_at, Some(datetime!(2025-03-14 09:30 UTC)));

    let back = serde_json::to_string(&profile).expect("profile should serialize");
    assert!(back.contains("\"isAdmin\":false"));
    assert!(back.contains("\"modifiedBy\":\"team@irislab.com\""));
}

#[test]
fn profile_parses_without_timestamps() {
    let raw = r#"{
        "id": "u2",
        "name": "Bob",
        "email": "bob@example.com",
        "status": "inactive",
        "isAdmin": false,
        "modifiedBy": "system"
    }"#;
    let profile: UserProfile = serde_json::from_str(raw).expect("profile should parse");
    assert_eq!(profile.created_at, None);
    assert_eq!(profile.created_at_ms(), 0);
}

#[test]
fn bootstrap_defaults_name_to_email_local_part() {
    let now = datetime!(2025-06-01 12:00 UTC);
    let profile = UserProfile::bootstrap("u3", "carol.smith@example.com", now);
    assert_eq!(profile.name, "carol.smith");
    assert_eq!(profile.status, UserStatus::Active);
    assert!(!profile.is_admin);
    assert_eq!(profile.modified_by, "system");
    assert_eq!(profile.created_at, Some(now));
    assert_eq!(profile.last_modified, Some(now));
}

#[test]
fn created_at_ms_uses_epoch_milliseconds() {
    let now = datetime!(1970-01-01 00:00:01 UTC);
    let profile = UserProfile::bootstrap("u4", "d@example.com", now);
    assert_eq!(profile.created_at_ms(), 1_000);
}

#[test]
fn date_label_formats_or_degrades() {
    assert_eq!(date_label(Some(datetime!(2025-03-14 09:30 UTC))), "2025-03-14");
    assert_eq!(date_label(None), "Not available");
}
