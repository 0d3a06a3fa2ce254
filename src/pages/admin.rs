//! Admin panel: account creation and the managed-user roster.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access guard has already demanded a session and resolved the admin
//! flag before this page may stay; the panel itself only renders workflows.

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::create_user_form::CreateUserForm;
use crate::components::user_controls::LogoutButton;
use crate::components::user_table::UserTable;
use crate::state::session::SessionState;

/// Panel tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum AdminTab {
    #[default]
    CreateUser,
    ManageUsers,
}

impl AdminTab {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::CreateUser => "Create User",
            Self::ManageUsers => "Manage Users",
        }
    }
}

/// Tabbed admin workspace with the operator's email in the header.
#[component]
pub fn AdminPanelPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let tab = RwSignal::new(AdminTab::default());

    let admin_email = move || {
        session_state
            .get()
            .email()
            .map_or_else(String::new, str::to_owned)
    };

    let tab_button = move |target: AdminTab| {
        view! {
            <button
                class="tab-button"
                class:active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin Panel"</h1>
                <span class="admin-page__email">{admin_email}</span>
                <LogoutButton/>
            </header>
            <nav class="admin-page__tabs">
                {tab_button(AdminTab::CreateUser)}
                {tab_button(AdminTab::ManageUsers)}
            </nav>
            <section class="admin-page__content">
                <Show when=move || tab.get() == AdminTab::CreateUser>
                    <CreateUserForm/>
                </Show>
                // Remounting on every switch re-fetches the roster.
                <Show when=move || tab.get() == AdminTab::ManageUsers>
                    <UserTable/>
                </Show>
            </section>
        </div>
    }
}
