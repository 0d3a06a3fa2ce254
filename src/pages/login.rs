//! Login page: end-user sign-in plus the admin access modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in is the one place account status is enforced: an inactive profile
//! ends the fresh session immediately. A missing profile document is
//! bootstrapped here so every authenticated account converges on exactly one
//! document.

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::flash_message::{FlashMessage, flash};
use crate::net::identity::IdentityGateway;
use crate::net::profiles::{ProfileStore, StoreError};
use crate::net::types::{UserProfile, UserStatus};
use crate::util::debounce::Debouncer;

/// What a fresh sign-in does with the profile lookup result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoginGate {
    /// Document exists and is active; continue to the app.
    Proceed,
    /// No document yet; write the bootstrap document, then continue.
    Bootstrap,
    /// Document says inactive; end the session and report it.
    BlockInactive,
    /// The lookup itself failed; continue anyway. Store trouble must not
    /// lock paying users out.
    ProceedDespiteError,
}

pub(crate) fn login_gate(lookup: &Result<Option<UserProfile>, StoreError>) -> LoginGate {
    match lookup {
        Ok(Some(profile)) if profile.status == UserStatus::Inactive => LoginGate::BlockInactive,
        Ok(Some(_)) => LoginGate::Proceed,
        Ok(None) => LoginGate::Bootstrap,
        Err(_) => LoginGate::ProceedDespiteError,
    }
}

/// Email/password sign-in with an admin-access side door.
#[component]
pub fn LoginPage() -> impl IntoView {
    let gateway = expect_context::<IdentityGateway>();
    let store = expect_context::<ProfileStore>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let show_admin = RwSignal::new(false);
    let flash_gate = Debouncer::new();

    let submit_gate = flash_gate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            flash(error, &submit_gate, "Enter both email and password.");
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let gateway = gateway.clone();
            let store = store.clone();
            let gate = submit_gate.clone();
            leptos::task::spawn_local(async move {
                match gateway.sign_in(&email_value, &password_value).await {
                    Err(e) => {
                        flash(error, &gate, e.to_string());
                        busy.set(false);
                    }
                    Ok(session) => {
                        let lookup = store.fetch(&session, &session.uid).await;
                        match login_gate(&lookup) {
                            LoginGate::BlockInactive => {
                                gateway.sign_out();
                                flash(error, &gate, "Your account is inactive. Please contact support.");
                                busy.set(false);
                                return;
                            }
                            LoginGate::Bootstrap => {
                                let profile = UserProfile::bootstrap(
                                    &session.uid,
                                    &session.email,
                                    time::OffsetDateTime::now_utc(),
                                );
                                if let Err(e) = store.create(&session, &profile).await {
                                    log::warn!("profile bootstrap failed, continuing login: {e}");
                                }
                            }
                            LoginGate::ProceedDespiteError => {
                                if let Err(e) = &lookup {
                                    log::warn!("profile check failed, continuing login: {e}");
                                }
                            }
                            LoginGate::Proceed => {}
                        }
                        crate::util::navigate::go_to(&crate::guard::app_target(
                            &crate::util::base_path::current_base_path(),
                        ));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&gateway, &store);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"IrisMapper"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <FlashMessage message=error/>
                <div class="login-divider"></div>
                <button class="login-admin-link" on:click=move |_| show_admin.set(true)>
                    "Admin Access"
                </button>
            </div>
            <Show when=move || show_admin.get()>
                <AdminAccessDialog on_close=Callback::new(move |()| show_admin.set(false))/>
            </Show>
        </div>
    }
}

/// Modal admin sign-in; confirms the admin flag before entering the panel.
#[component]
fn AdminAccessDialog(on_close: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<IdentityGateway>();
    let store = expect_context::<ProfileStore>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let flash_gate = Debouncer::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            flash(error, &flash_gate, "Enter both email and password.");
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let gateway = gateway.clone();
            let store = store.clone();
            let gate = flash_gate.clone();
            leptos::task::spawn_local(async move {
                match gateway.sign_in(&email_value, &password_value).await {
                    Err(e) => {
                        flash(error, &gate, e.to_string());
                        busy.set(false);
                    }
                    Ok(session) => match store.is_admin(&session).await {
                        Ok(true) => {
                            // One-time check that the provisioned admin
                            // document is still queryable; logged only.
                            match store
                                .find_bootstrap_admin(&session, crate::net::config::BOOTSTRAP_ADMIN_EMAIL)
                                .await
                            {
                                Ok(Some(_)) => log::info!("bootstrap admin document present"),
                                Ok(None) => log::warn!("bootstrap admin document missing"),
                                Err(e) => log::warn!("bootstrap admin lookup failed: {e}"),
                            }
                            crate::util::navigate::go_to(&crate::guard::admin_target(
                                &crate::util::base_path::current_base_path(),
                            ));
                        }
                        Ok(false) => {
                            gateway.sign_out();
                            flash(error, &gate, "You do not have admin privileges");
                            busy.set(false);
                        }
                        Err(e) => {
                            gateway.sign_out();
                            flash(error, &gate, e.to_string());
                            busy.set(false);
                        }
                    },
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&gateway, &store, &flash_gate);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Admin Access"</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="admin@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In as Admin"
                    </button>
                </form>
                <FlashMessage message=error/>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
