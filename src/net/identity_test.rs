use std::sync::{Arc, Mutex};

use super::*;

fn gateway() -> IdentityGateway {
    IdentityGateway::new(BackendConfig::irismapper())
}

fn session(uid: &str) -> Session {
    Session {
        uid: uid.to_owned(),
        email: format!("{uid}@example.com"),
        id_token: "tok".to_owned(),
    }
}

/// Collects every notification a listener receives.
struct Recorder {
    seen: Arc<Mutex<Vec<Option<Session>>>>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn listener(&self) -> impl Fn(Option<Session>) + Send + Sync + 'static {
        let sink = self.seen.clone();
        move |s: Option<Session>| {
            if let Ok(mut log) = sink.lock() {
                log.push(s);
            }
        }
    }

    fn log(&self) -> Vec<Option<Session>> {
        self.seen.lock().expect("recorder lock").clone()
    }
}

// =============================================================
// Subscription delivery
// =============================================================

#[test]
fn listener_before_restore_waits_for_first_notification() {
    let gateway = gateway();
    let recorder = Recorder::new();
    let _sub = gateway.subscribe(recorder.listener());
    assert!(recorder.log().is_empty());

    gateway.restore();
    assert_eq!(recorder.log(), vec![None]);
}

#[test]
fn listener_after_restore_is_invoked_immediately() {
    let gateway = gateway();
    gateway.restore();
    let recorder = Recorder::new();
    let _sub = gateway.subscribe(recorder.listener());
    assert_eq!(recorder.log().len(), 1);
}

#[test]
fn install_notifies_with_the_new_session() {
    let gateway = gateway();
    gateway.restore();
    let recorder = Recorder::new();
    let _sub = gateway.subscribe(recorder.listener());

    gateway.install(Some(session("u1")));
    let log = recorder.log();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].as_ref().map(|s| s.uid.as_str()), Some("u1"));
}

#[test]
fn sign_out_clears_session_and_notifies() {
    let gateway = gateway();
    gateway.install(Some(session("u1")));
    let recorder = Recorder::new();
    let _sub = gateway.subscribe(recorder.listener());

    gateway.sign_out();
    assert_eq!(gateway.session(), None);
    assert!(recorder.log().iter().any(Option::is_none));
}

#[test]
fn unsubscribe_stops_delivery() {
    let gateway = gateway();
    gateway.restore();
    let recorder = Recorder::new();
    let sub = gateway.subscribe(recorder.listener());
    sub.unsubscribe();

    gateway.install(Some(session("u1")));
    // Only the immediate post-restore invocation was delivered.
    assert_eq!(recorder.log().len(), 1);
}

#[test]
fn listeners_are_independent() {
    let gateway = gateway();
    gateway.restore();
    let first = Recorder::new();
    let second = Recorder::new();
    let first_sub = gateway.subscribe(first.listener());
    let _second_sub = gateway.subscribe(second.listener());
    first_sub.unsubscribe();

    gateway.install(Some(session("u2")));
    assert_eq!(first.log().len(), 1);
    assert_eq!(second.log().len(), 2);
}

// =============================================================
// Session snapshots
// =============================================================

#[test]
fn session_returns_a_snapshot() {
    let gateway = gateway();
    assert_eq!(gateway.session(), None);
    gateway.install(Some(session("u3")));
    assert_eq!(gateway.session().map(|s| s.uid), Some("u3".to_owned()));
}

// =============================================================
// Wire bodies
// =============================================================

#[test]
fn credential_response_parses_provider_field_names() {
    let raw = r#"{"localId": "u9", "email": "u9@example.com", "idToken": "jwt"}"#;
    let body: CredentialResponse = serde_json::from_str(raw).expect("response should parse");
    assert_eq!(body.local_id, "u9");
    assert_eq!(body.id_token, "jwt");
}

#[test]
fn error_body_carries_provider_message() {
    let raw = r#"{"error": {"message": "INVALID_PASSWORD"}}"#;
    let body: ErrorBody = serde_json::from_str(raw).expect("error body should parse");
    assert_eq!(body.error.message, "INVALID_PASSWORD");
}

#[test]
fn rejected_error_displays_the_provider_message() {
    let err = AuthError::Rejected("EMAIL_EXISTS".to_owned());
    assert_eq!(err.to_string(), "EMAIL_EXISTS");
}
