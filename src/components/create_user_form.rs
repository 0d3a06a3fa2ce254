//! Create-user form for the admin panel.
//!
//! TRADE-OFFS
//! ==========
//! Account creation is two writes against two services. If the identity
//! account is created but the profile write fails, the operation still
//! reports success: the account exists and can sign in (its first login
//! bootstraps the missing document), so the gap is logged rather than shown
//! to the operator.

#[cfg(test)]
#[path = "create_user_form_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::flash_message::{FlashMessage, flash};
use crate::net::identity::IdentityGateway;
use crate::net::profiles::ProfileStore;
use crate::net::types::{UserProfile, UserStatus};
use crate::state::session::SessionState;
use crate::util::debounce::Debouncer;

/// Local checks applied before any backend call; returns the first failing
/// message.
pub(crate) fn validate_new_user(name: &str, email: &str, password: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("All fields are required".to_owned());
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_owned());
    }
    Ok(())
}

/// Profile document for a freshly provisioned account.
pub(crate) fn provisioned_profile(
    uid: &str,
    name: &str,
    email: &str,
    admin_email: &str,
    now: time::OffsetDateTime,
) -> UserProfile {
    UserProfile {
        id: uid.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        status: UserStatus::Active,
        is_admin: false,
        created_at: Some(now),
        last_modified: Some(now),
        modified_by: admin_email.to_owned(),
    }
}

/// Name, email, and password inputs with a password generator.
#[component]
pub fn CreateUserForm() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let gateway = expect_context::<IdentityGateway>();
    let store = expect_context::<ProfileStore>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let flash_gate = Debouncer::new();

    let submit_gate = flash_gate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(message) = validate_new_user(&name_value, &email_value, &password_value) {
            flash(error, &submit_gate, message);
            return;
        }
        let Some(admin_email) = session_state.get_untracked().email().map(str::to_owned) else {
            flash(error, &submit_gate, "Admin authentication lost. Please log in again.");
            return;
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let gateway = gateway.clone();
            let store = store.clone();
            let gate = submit_gate.clone();
            leptos::task::spawn_local(async move {
                match gateway.sign_up(&email_value, &password_value).await {
                    Err(e) => {
                        flash(error, &gate, e.to_string());
                    }
                    Ok(created) => {
                        let admin_session = session_state.get_untracked().session;
                        if let Some(admin_session) = admin_session {
                            let profile = provisioned_profile(
                                &created.uid,
                                &name_value,
                                &email_value,
                                &admin_email,
                                time::OffsetDateTime::now_utc(),
                            );
                            if let Err(e) = store.create(&admin_session, &profile).await {
                                log::warn!("profile write failed after account creation: {e}");
                            }
                        }
                        flash(success, &gate, format!("User {name_value} created successfully"));
                        name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&gateway, &store, &admin_email);
            busy.set(false);
        }
    };

    let on_generate = move |_| {
        #[cfg(feature = "csr")]
        password.set(crate::util::password::generate());
    };

    view! {
        <form class="create-user" on:submit=on_submit>
            <h2>"Create New User"</h2>
            <FlashMessage message=error/>
            <FlashMessage message=success success=true/>
            <label class="create-user__label">
                "Name"
                <input
                    class="create-user__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="create-user__label">
                "Email"
                <input
                    class="create-user__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="create-user__label">
                "Password"
                <input
                    class="create-user__input"
                    type="text"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <div class="create-user__actions">
                <button class="btn" type="button" on:click=on_generate>
                    "Generate Password"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create User" }}
                </button>
            </div>
        </form>
    }
}
