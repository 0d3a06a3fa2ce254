use super::*;
use time::macros::datetime;

fn session() -> Session {
    Session {
        uid: "admin1".to_owned(),
        email: "team@irislab.com".to_owned(),
        id_token: "jwt-abc".to_owned(),
    }
}

#[test]
fn bearer_header_wraps_the_id_token() {
    assert_eq!(bearer(&session()), "Bearer jwt-abc");
}

#[test]
fn status_patch_carries_status_and_audit_fields() {
    let now = datetime!(2025-05-20 08:15 UTC);
    let patch = status_patch(UserStatus::Inactive, "team@irislab.com", now).expect("patch should build");
    assert_eq!(patch["status"], "inactive");
    assert_eq!(patch["modifiedBy"], "team@irislab.com");
    assert_eq!(patch["lastModified"], "2025-05-20T08:15:00Z");
}

#[test]
fn status_patch_never_touches_other_fields() {
    let now = datetime!(2025-05-20 08:15 UTC);
    let patch = status_patch(UserStatus::Active, "x@y.z", now).expect("patch should build");
    let object = patch.as_object().expect("patch is an object");
    assert_eq!(object.len(), 3);
    assert!(!object.contains_key("isAdmin"));
}

#[test]
fn store_error_messages_name_the_failure() {
    let transport = StoreError::Transport("timeout".to_owned());
    assert_eq!(transport.to_string(), "profile store request failed: timeout");

    let backend = StoreError::Backend {
        status: 503,
        message: "unavailable".to_owned(),
    };
    assert_eq!(backend.to_string(), "profile store error 503: unavailable");
}
