//! Application root: backend clients, shared state, and the route table.
//!
//! ARCHITECTURE
//! ============
//! Contexts provided here are the only channel between layers: pages and
//! components read the session signal and the backend clients, and the
//! access guard is the only writer of session state.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::guard::{AccessGuard, UserControlsFlag};
use crate::net::config::BackendConfig;
use crate::net::identity::IdentityGateway;
use crate::net::profiles::ProfileStore;
use crate::pages::admin::AdminPanelPage;
use crate::pages::app_home::MainAppPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::state::session::SessionState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = BackendConfig::irismapper();
    provide_context(IdentityGateway::new(config.clone()));
    provide_context(ProfileStore::new(config));
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(UserControlsFlag(RwSignal::new(false)));

    view! {
        <Title text="IrisMapper"/>
        <Router>
            <AccessGuard/>
            <main class="app-shell">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=MainAppPage/>
                    <Route path=path!("/index") view=MainAppPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                    <Route path=path!("/admin-panel") view=AdminPanelPage/>
                </Routes>
            </main>
        </Router>
    }
}
