//! Profile page: the signed-in user's stored details.
//!
//! ERROR HANDLING
//! ==============
//! A missing document degrades, it does not fail: the email still comes from
//! the session and the return-to-app link is always wired. Timestamps
//! without a value render a placeholder.

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::user_controls::LogoutButton;
use crate::guard::app_target;
use crate::net::profiles::ProfileStore;
use crate::net::types::{UserProfile, date_label};
use crate::state::session::SessionState;
use crate::util::base_path::current_base_path;

/// Presenter state for one profile fetch.
#[derive(Clone, Debug, Default)]
pub(crate) struct ProfileView {
    pub loading: bool,
    pub profile: Option<UserProfile>,
    /// The document does not exist (as opposed to not fetched yet).
    pub missing: bool,
    pub error: Option<String>,
}

pub(crate) fn name_line(view: &ProfileView) -> String {
    if let Some(profile) = &view.profile {
        if profile.name.is_empty() {
            "No name provided".to_owned()
        } else {
            profile.name.clone()
        }
    } else if view.error.is_some() {
        "Error loading profile data.".to_owned()
    } else if view.missing {
        "User data not found.".to_owned()
    } else {
        String::new()
    }
}

/// Document email, falling back to the session email when the document is
/// absent.
pub(crate) fn email_line(view: &ProfileView, session_email: Option<&str>) -> String {
    view.profile
        .as_ref()
        .map(|p| p.email.clone())
        .or_else(|| session_email.map(str::to_owned))
        .unwrap_or_else(|| "N/A".to_owned())
}

pub(crate) fn created_line(view: &ProfileView) -> String {
    view.profile
        .as_ref()
        .map_or_else(|| "Not available".to_owned(), |p| date_label(p.created_at))
}

/// The signed-in user's profile details.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ProfileStore>();

    let state = RwSignal::new(ProfileView {
        loading: true,
        ..ProfileView::default()
    });

    // Fetch once the session has resolved; the guard redirects the
    // signed-out case.
    let fetched_once = RwSignal::new(false);
    Effect::new(move || {
        if fetched_once.get() {
            return;
        }
        let Some(session) = session_state.get().session else {
            return;
        };
        fetched_once.set(true);
        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                match store.fetch(&session, &session.uid).await {
                    Ok(Some(profile)) => state.set(ProfileView {
                        profile: Some(profile),
                        ..ProfileView::default()
                    }),
                    Ok(None) => state.set(ProfileView {
                        missing: true,
                        ..ProfileView::default()
                    }),
                    Err(e) => state.set(ProfileView {
                        error: Some(e.to_string()),
                        ..ProfileView::default()
                    }),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&store, session);
        }
    });

    let app_href = app_target(&current_base_path());

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <h1>"Your Profile"</h1>
                <Show
                    when=move || !state.get().loading
                    fallback=|| view! { <p class="profile-card__loading">"Loading profile..."</p> }
                >
                    <div class="profile-card__row">
                        <span class="profile-card__label">"Name"</span>
                        <span class="profile-card__value">{move || name_line(&state.get())}</span>
                    </div>
                    <div class="profile-card__row">
                        <span class="profile-card__label">"Email"</span>
                        <span class="profile-card__value">
                            {move || email_line(&state.get(), session_state.get().email())}
                        </span>
                    </div>
                    <div class="profile-card__row">
                        <span class="profile-card__label">"Member since"</span>
                        <span class="profile-card__value">{move || created_line(&state.get())}</span>
                    </div>
                </Show>
                <div class="profile-card__actions">
                    <a class="btn btn--primary" href=app_href>
                        "Back to App"
                    </a>
                    <LogoutButton/>
                </div>
            </div>
        </div>
    }
}
