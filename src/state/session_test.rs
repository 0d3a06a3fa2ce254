use super::*;

fn session() -> Session {
    Session {
        uid: "u1".to_owned(),
        email: "ann@example.com".to_owned(),
        id_token: "tok".to_owned(),
    }
}

#[test]
fn default_state_is_loading_without_session() {
    let state = SessionState::default();
    assert!(state.loading);
    assert_eq!(state.session, None);
    assert_eq!(state.email(), None);
}

#[test]
fn resolved_state_clears_loading() {
    let state = SessionState::resolved(None);
    assert!(!state.loading);
    assert_eq!(state.session, None);
}

#[test]
fn resolved_state_exposes_the_session_email() {
    let state = SessionState::resolved(Some(session()));
    assert!(!state.loading);
    assert_eq!(state.email(), Some("ann@example.com"));
}
