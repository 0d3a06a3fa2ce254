//! Access guard: page classification, redirect policy, and session fan-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is classified and checked against the live session on
//! each session-change notification, not only at first load, so an external
//! sign-out while a protected page is open still evicts it on the next
//! notification. Route changes re-run the same checks against the last
//! resolved session.
//!
//! TRADE-OFFS
//! ==========
//! An admin lookup started by one notification is never cancelled by the
//! next; a late verdict may arrive after navigation and its redirect is then
//! a harmless reload of the login page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::net::identity::IdentityGateway;
use crate::net::profiles::{ProfileStore, StoreError};
use crate::net::types::Session;
use crate::state::session::SessionState;
use crate::util::base_path::base_path;
use crate::util::navigate::go_to;

/// Guard-relevant classification of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Login,
    AdminPanel,
    Profile,
    MainApp,
    /// Unclassified pages are left unguarded.
    Other,
}

/// Classify `path` by substring marker; first match wins in this order.
#[must_use]
pub fn classify_path(path: &str) -> PageKind {
    if path.contains("login") {
        return PageKind::Login;
    }
    if path.contains("admin-panel") {
        return PageKind::AdminPanel;
    }
    if path.contains("profile") {
        return PageKind::Profile;
    }
    if is_main_app_path(path) {
        return PageKind::MainApp;
    }
    PageKind::Other
}

/// The main app is the index route: an explicit `index` marker, the bare
/// root, or any path under a known deployment folder.
fn is_main_app_path(path: &str) -> bool {
    if path.contains("index") {
        return true;
    }
    if path.split('/').all(str::is_empty) {
        return true;
    }
    base_path(path) != "/"
}

/// What the guard does for one (page, session) pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    RedirectToApp,
    RedirectToLogin,
    /// Show the signed-in controls on the main app page, at most once.
    InjectUserControls,
    /// Session is in place; the profile page renders from it.
    PresentProfile,
    /// Admin access requires an async flag lookup before the page may stay.
    ResolveAdmin,
    Stay,
}

/// The page-classification → required-state table.
#[must_use]
pub fn evaluate(page: PageKind, has_session: bool) -> GuardOutcome {
    match (page, has_session) {
        (PageKind::Login, true) => GuardOutcome::RedirectToApp,
        (PageKind::MainApp, true) => GuardOutcome::InjectUserControls,
        (PageKind::AdminPanel, true) => GuardOutcome::ResolveAdmin,
        (PageKind::Profile, true) => GuardOutcome::PresentProfile,
        (PageKind::AdminPanel | PageKind::Profile | PageKind::MainApp, false) => GuardOutcome::RedirectToLogin,
        (PageKind::Login, false) | (PageKind::Other, _) => GuardOutcome::Stay,
    }
}

/// Admin-panel resolution: a failed lookup must never grant access.
#[must_use]
pub fn admin_outcome(lookup: Result<bool, StoreError>) -> GuardOutcome {
    match lookup {
        Ok(true) => GuardOutcome::Stay,
        Ok(false) | Err(_) => GuardOutcome::RedirectToLogin,
    }
}

/// Redirect target for the main app under `base`.
#[must_use]
pub fn app_target(base: &str) -> String {
    format!("{base}index")
}

/// Redirect target for the login page under `base`.
#[must_use]
pub fn login_target(base: &str) -> String {
    format!("{base}login")
}

/// Redirect target for the admin panel under `base`.
#[must_use]
pub fn admin_target(base: &str) -> String {
    format!("{base}admin-panel")
}

/// Idempotency flag for main-app user-controls injection; owned by the
/// guard, read by the main-app page.
#[derive(Clone, Copy)]
pub struct UserControlsFlag(pub RwSignal<bool>);

/// Mounts the guard for this page lifetime: registers exactly one
/// session-change subscription (released on cleanup), restores the mirrored
/// session to trigger the first notification, and re-applies the rule table
/// whenever the route changes.
#[component]
pub fn AccessGuard() -> impl IntoView {
    let gateway = expect_context::<IdentityGateway>();
    let store = expect_context::<ProfileStore>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let controls = expect_context::<UserControlsFlag>();

    let notified_store = store.clone();
    let subscription = gateway.subscribe(move |session| {
        session_state.set(SessionState::resolved(session.clone()));
        apply(&notified_store, session.as_ref(), &current_path(), controls);
    });
    on_cleanup(move || subscription.unsubscribe());

    let location = leptos_router::hooks::use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        let state = session_state.get_untracked();
        if state.loading {
            return;
        }
        apply(&store, state.session.as_ref(), &path, controls);
    });

    gateway.restore();
}

/// Run the rule table once for `path` against `session`.
fn apply(store: &ProfileStore, session: Option<&Session>, path: &str, controls: UserControlsFlag) {
    let base = base_path(path);
    match evaluate(classify_path(path), session.is_some()) {
        GuardOutcome::RedirectToApp => go_to(&app_target(&base)),
        GuardOutcome::RedirectToLogin => go_to(&login_target(&base)),
        GuardOutcome::InjectUserControls => {
            if !controls.0.get_untracked() {
                controls.0.set(true);
            }
        }
        GuardOutcome::ResolveAdmin => {
            #[cfg(feature = "csr")]
            {
                let Some(session) = session.cloned() else {
                    return;
                };
                let store = store.clone();
                let target = login_target(&base);
                leptos::task::spawn_local(async move {
                    if admin_outcome(store.is_admin(&session).await) == GuardOutcome::RedirectToLogin {
                        go_to(&target);
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = store;
            }
        }
        GuardOutcome::PresentProfile | GuardOutcome::Stay => {}
    }
}

fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}
