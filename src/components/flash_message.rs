//! Transient status messages with auto-dismissal.
//!
//! A flash stays on screen for a fixed interval and then clears itself; a
//! newer flash supersedes the pending dismissal of an older one so rapid
//! errors never blank each other early.

#[cfg(test)]
#[path = "flash_message_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::util::debounce::Debouncer;

/// How long a flash message stays visible.
pub const FLASH_DISMISS_MS: u64 = 3_000;

/// Show `message` in `slot` and schedule its dismissal.
pub fn flash(slot: RwSignal<Option<String>>, gate: &Debouncer, message: impl Into<String>) {
    slot.set(Some(message.into()));
    let token = gate.arm();
    #[cfg(feature = "csr")]
    {
        let gate = gate.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(FLASH_DISMISS_MS)).await;
            if gate.is_current(token) {
                slot.set(None);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Inline error or success text; renders nothing while the slot is empty.
#[component]
pub fn FlashMessage(message: RwSignal<Option<String>>, #[prop(optional)] success: bool) -> impl IntoView {
    let class = if success { "flash flash--success" } else { "flash flash--error" };
    view! {
        <Show when=move || message.get().is_some()>
            <p class=class>{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
