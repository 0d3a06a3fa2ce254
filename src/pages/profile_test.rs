use super::*;
use time::macros::datetime;

fn loaded(profile: UserProfile) -> ProfileView {
    ProfileView {
        profile: Some(profile),
        ..ProfileView::default()
    }
}

fn missing() -> ProfileView {
    ProfileView {
        missing: true,
        ..ProfileView::default()
    }
}

fn sample_profile() -> UserProfile {
    UserProfile::bootstrap("u1", "ann@example.com", datetime!(2025-02-01 08:00 UTC))
}

#[test]
fn name_line_prefers_the_document_name() {
    assert_eq!(name_line(&loaded(sample_profile())), "ann");
}

#[test]
fn name_line_reports_a_blank_name() {
    let mut profile = sample_profile();
    profile.name = String::new();
    assert_eq!(name_line(&loaded(profile)), "No name provided");
}

#[test]
fn name_line_reports_a_missing_document() {
    assert_eq!(name_line(&missing()), "User data not found.");
}

#[test]
fn name_line_reports_a_failed_fetch() {
    let view = ProfileView {
        error: Some("profile store request failed: offline".to_owned()),
        ..ProfileView::default()
    };
    assert_eq!(name_line(&view), "Error loading profile data.");
}

#[test]
fn email_falls_back_to_the_session_when_the_document_is_missing() {
    assert_eq!(email_line(&missing(), Some("ann@example.com")), "ann@example.com");
}

#[test]
fn email_degrades_to_placeholder_without_any_source() {
    assert_eq!(email_line(&missing(), None), "N/A");
}

#[test]
fn created_line_formats_or_degrades() {
    assert_eq!(created_line(&loaded(sample_profile())), "2025-02-01");

    let mut undated = sample_profile();
    undated.created_at = None;
    assert_eq!(created_line(&loaded(undated)), "Not available");
    assert_eq!(created_line(&missing()), "Not available");
}
