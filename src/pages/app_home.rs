//! Main application shell page.
//!
//! The mapping workspace itself ships separately as static content; this
//! shell is the routed `index` page that hosts the guard-injected user
//! controls.

use leptos::prelude::*;

use crate::components::user_controls::UserControls;
use crate::guard::UserControlsFlag;
use crate::state::session::SessionState;

#[component]
pub fn MainAppPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let controls = expect_context::<UserControlsFlag>();

    view! {
        <div class="app-page">
            <Show when=move || controls.0.get()>
                <UserControls/>
            </Show>
            <section class="app-page__stage">
                <h1>"IrisMapper"</h1>
                <Show
                    when=move || !session_state.get().loading
                    fallback=|| view! { <p class="app-page__loading">"Loading..."</p> }
                >
                    <p class="app-page__hint">"Select a map template to begin."</p>
                </Show>
            </section>
        </div>
    }
}
