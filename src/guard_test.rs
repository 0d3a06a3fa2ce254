use super::*;

// =============================================================
// Path classification
// =============================================================

#[test]
fn login_marker_wins_first() {
    assert_eq!(classify_path("/login"), PageKind::Login);
    assert_eq!(classify_path("/irismapper/login"), PageKind::Login);
}

#[test]
fn admin_panel_marker_is_recognized() {
    assert_eq!(classify_path("/admin-panel"), PageKind::AdminPanel);
    assert_eq!(classify_path("/irismapper-main/admin-panel"), PageKind::AdminPanel);
}

#[test]
fn profile_beats_main_app_under_a_mount_prefix() {
    // The deployment folder alone marks a main-app path; the profile marker
    // must still take precedence.
    assert_eq!(classify_path("/irismapper/profile"), PageKind::Profile);
}

#[test]
fn index_and_root_are_main_app() {
    assert_eq!(classify_path("/index"), PageKind::MainApp);
    assert_eq!(classify_path("/"), PageKind::MainApp);
    assert_eq!(classify_path("/irismapper-main/"), PageKind::MainApp);
}

#[test]
fn unknown_paths_are_unguarded() {
    assert_eq!(classify_path("/pricing"), PageKind::Other);
    assert_eq!(classify_path("/docs/getting-started"), PageKind::Other);
}

// =============================================================
// Rule table
// =============================================================

#[test]
fn signed_in_login_page_redirects_to_app() {
    assert_eq!(evaluate(PageKind::Login, true), GuardOutcome::RedirectToApp);
}

#[test]
fn signed_in_main_app_injects_controls() {
    assert_eq!(evaluate(PageKind::MainApp, true), GuardOutcome::InjectUserControls);
}

#[test]
fn signed_in_admin_panel_requires_resolution() {
    assert_eq!(evaluate(PageKind::AdminPanel, true), GuardOutcome::ResolveAdmin);
}

#[test]
fn signed_in_profile_presents() {
    assert_eq!(evaluate(PageKind::Profile, true), GuardOutcome::PresentProfile);
}

#[test]
fn signed_out_protected_pages_redirect_to_login() {
    assert_eq!(evaluate(PageKind::AdminPanel, false), GuardOutcome::RedirectToLogin);
    assert_eq!(evaluate(PageKind::Profile, false), GuardOutcome::RedirectToLogin);
    assert_eq!(evaluate(PageKind::MainApp, false), GuardOutcome::RedirectToLogin);
}

#[test]
fn login_and_unknown_pages_are_left_alone() {
    assert_eq!(evaluate(PageKind::Login, false), GuardOutcome::Stay);
    assert_eq!(evaluate(PageKind::Other, false), GuardOutcome::Stay);
    assert_eq!(evaluate(PageKind::Other, true), GuardOutcome::Stay);
}

// =============================================================
// Admin resolution
// =============================================================

#[test]
fn confirmed_admin_stays() {
    assert_eq!(admin_outcome(Ok(true)), GuardOutcome::Stay);
}

#[test]
fn non_admin_is_redirected() {
    assert_eq!(admin_outcome(Ok(false)), GuardOutcome::RedirectToLogin);
}

#[test]
fn lookup_failure_denies_by_default() {
    let failure = Err(StoreError::Transport("offline".to_owned()));
    assert_eq!(admin_outcome(failure), GuardOutcome::RedirectToLogin);
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn targets_are_prefixed_with_the_base() {
    assert_eq!(app_target("/"), "/index");
    assert_eq!(login_target("/"), "/login");
    assert_eq!(admin_target("/"), "/admin-panel");
    assert_eq!(app_target("/irismapper/"), "/irismapper/index");
    assert_eq!(login_target("/irismapper-main/"), "/irismapper-main/login");
    assert_eq!(admin_target("/irismapper/"), "/irismapper/admin-panel");
}
