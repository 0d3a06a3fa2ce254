//! Signed-in user controls for the main app page.

use leptos::prelude::*;

use crate::guard::login_target;
use crate::net::identity::IdentityGateway;
use crate::util::base_path::current_base_path;
use crate::util::navigate::go_to;

/// Profile link plus logout, floated over the main app.
#[component]
pub fn UserControls() -> impl IntoView {
    let profile_href = format!("{}profile", current_base_path());
    view! {
        <div class="user-controls">
            <a class="user-control-btn" href=profile_href>
                "Profile"
            </a>
            <LogoutButton/>
        </div>
    }
}

/// Sign out and return to the login page.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let gateway = expect_context::<IdentityGateway>();
    let on_logout = move |_| {
        gateway.sign_out();
        go_to(&login_target(&current_base_path()));
    };
    view! {
        <button class="user-control-btn secondary" on:click=on_logout>
            "Logout"
        </button>
    }
}
