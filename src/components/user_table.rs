//! Manage-users roster table: filters, sortable headers, status toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared session for audit attribution and talks to the profile
//! store directly. Every mutation, failed mutation, or cancelled mutation
//! ends in a re-fetch so the table converges on server truth — the toggle's
//! checked state flips optimistically in the DOM before confirmation and the
//! re-fetch is what resets it.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::flash_message::{FlashMessage, flash};
use crate::net::profiles::ProfileStore;
use crate::net::types::{UserProfile, UserStatus, date_label};
use crate::state::roster::{
    RosterFilter, RosterState, SortDirection, SortField, filter_profiles, load_sort_preference, next_sort,
    save_sort_preference, sort_profiles,
};
use crate::state::session::SessionState;
use crate::util::debounce::Debouncer;

/// A requested status change awaiting confirmation.
#[derive(Clone, Debug)]
struct PendingToggle {
    profile: UserProfile,
    next: UserStatus,
}

/// Copy shown in the confirmation dialog, naming the user and the
/// destination status.
fn confirm_message(name: &str, next: UserStatus) -> String {
    format!("Are you sure you want to change {name}'s status to {}?", next.label())
}

/// Header class carrying the active sort indicator.
fn header_class(current: (SortField, SortDirection), field: SortField) -> &'static str {
    if current.0 == field {
        match current.1 {
            SortDirection::Asc => "sortable sort-asc",
            SortDirection::Desc => "sortable sort-desc",
        }
    } else {
        "sortable"
    }
}

/// Filterable, sortable roster of non-admin users with activation toggles.
#[component]
pub fn UserTable() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ProfileStore>();

    let roster = RwSignal::new(RosterState::default());
    let filter = RwSignal::new(RosterFilter::default());
    // Read once at init; every header click overwrites it.
    let sort = RwSignal::new(load_sort_preference());
    let pending = RwSignal::new(None::<PendingToggle>);
    let toggle_error = RwSignal::new(None::<String>);
    let flash_gate = Debouncer::new();
    let search_gate = Debouncer::new();

    let load_store = store.clone();
    let load = Callback::new(move |()| {
        roster.update(|r| {
            r.loading = true;
            r.error = None;
        });
        #[cfg(feature = "csr")]
        {
            let store = load_store.clone();
            leptos::task::spawn_local(async move {
                let Some(session) = session_state.get_untracked().session else {
                    return;
                };
                match store.fetch_all(&session).await {
                    Ok(profiles) => roster.update(|r| {
                        r.profiles = profiles;
                        r.loading = false;
                        r.loaded = true;
                    }),
                    Err(e) => roster.update(|r| {
                        r.error = Some(e.to_string());
                        r.loading = false;
                        r.loaded = true;
                    }),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &load_store;
        }
    });

    // First fetch once the session has resolved.
    let fetched_once = RwSignal::new(false);
    Effect::new(move || {
        if fetched_once.get() {
            return;
        }
        if session_state.get().session.is_some() {
            fetched_once.set(true);
            load.run(());
        }
    });

    let rows = move || {
        let (field, direction) = sort.get();
        sort_profiles(filter_profiles(&roster.get().profiles, &filter.get()), field, direction)
    };

    let on_sort = move |clicked: SortField| {
        let (field, direction) = sort.get_untracked();
        let next = next_sort(field, direction, clicked);
        save_sort_preference(next.0, next.1);
        sort.set(next);
        load.run(());
    };

    let on_search = move |ev| {
        filter.update(|f| f.search = event_target_value(&ev));
        let token = search_gate.arm();
        #[cfg(feature = "csr")]
        {
            let gate = search_gate.clone();
            leptos::task::spawn_local(async move {
                let delay = std::time::Duration::from_millis(crate::util::debounce::SEARCH_DEBOUNCE_MS);
                gloo_timers::future::sleep(delay).await;
                if gate.is_current(token) {
                    load.run(());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    };

    let confirm_store = store.clone();
    let on_confirm = Callback::new(move |()| {
        let Some(toggle) = pending.get_untracked() else {
            return;
        };
        pending.set(None);
        #[cfg(feature = "csr")]
        {
            let store = confirm_store.clone();
            let gate = flash_gate.clone();
            leptos::task::spawn_local(async move {
                if let Some(session) = session_state.get_untracked().session {
                    let actor = session.email.clone();
                    let written = store
                        .update_status(
                            &session,
                            &toggle.profile.id,
                            toggle.next,
                            &actor,
                            time::OffsetDateTime::now_utc(),
                        )
                        .await;
                    if let Err(e) = written {
                        flash(toggle_error, &gate, e.to_string());
                    }
                }
                // Re-fetch regardless of the write's outcome.
                load.run(());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&confirm_store, &flash_gate, toggle);
            load.run(());
        }
    });

    let on_cancel = Callback::new(move |()| {
        pending.set(None);
        // Re-fetch without writing, to reset the optimistic toggle.
        load.run(());
    });

    view! {
        <div class="roster">
            <div class="roster__filters">
                <label class="roster__filter">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.get().show_active
                        on:change=move |ev| {
                            filter.update(|f| f.show_active = event_target_checked(&ev));
                            load.run(());
                        }
                    />
                    "Active"
                </label>
                <label class="roster__filter">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.get().show_inactive
                        on:change=move |ev| {
                            filter.update(|f| f.show_inactive = event_target_checked(&ev));
                            load.run(());
                        }
                    />
                    "Inactive"
                </label>
                <input
                    class="roster__search"
                    type="text"
                    placeholder="Search by name or email"
                    prop:value=move || filter.get().search
                    on:input=on_search
                />
            </div>

            <FlashMessage message=toggle_error/>

            <Show when=move || roster.get().error.is_some()>
                <p class="roster__error">{move || roster.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !roster.get().loading
                fallback=|| view! { <p class="roster__loading">"Loading users..."</p> }
            >
                <Show
                    when=move || !rows().is_empty()
                    fallback=|| view! { <p class="roster__empty">"No users found."</p> }
                >
                    <table class="roster__table">
                        <thead>
                            <tr>
                                <th
                                    class=move || header_class(sort.get(), SortField::Name)
                                    on:click=move |_| on_sort(SortField::Name)
                                >
                                    "Name"
                                </th>
                                <th
                                    class=move || header_class(sort.get(), SortField::Email)
                                    on:click=move |_| on_sort(SortField::Email)
                                >
                                    "Email"
                                </th>
                                <th
                                    class=move || header_class(sort.get(), SortField::CreatedAt)
                                    on:click=move |_| on_sort(SortField::CreatedAt)
                                >
                                    "Created"
                                </th>
                                <th
                                    class=move || header_class(sort.get(), SortField::Status)
                                    on:click=move |_| on_sort(SortField::Status)
                                >
                                    "Status"
                                </th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rows()
                                    .into_iter()
                                    .map(|profile| {
                                        let status_class = if profile.status == UserStatus::Active {
                                            "status-active"
                                        } else {
                                            "status-inactive"
                                        };
                                        let toggled = profile.clone();
                                        view! {
                                            <tr>
                                                <td>{profile.name.clone()}</td>
                                                <td>{profile.email.clone()}</td>
                                                <td>{date_label(profile.created_at)}</td>
                                                <td>
                                                    <span class=status_class>{profile.status.display_label()}</span>
                                                </td>
                                                <td>
                                                    <label class="status-toggle">
                                                        <input
                                                            type="checkbox"
                                                            prop:checked={profile.status == UserStatus::Active}
                                                            on:change=move |_| {
                                                                pending.set(Some(PendingToggle {
                                                                    next: toggled.status.flipped(),
                                                                    profile: toggled.clone(),
                                                                }));
                                                            }
                                                        />
                                                        <span class="status-slider"></span>
                                                    </label>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || pending.get().is_some()>
                <ConfirmStatusDialog pending=pending on_confirm=on_confirm on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

/// Modal confirming one status change; dismissing by backdrop counts as a
/// decline.
#[component]
fn ConfirmStatusDialog(
    pending: RwSignal<Option<PendingToggle>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let message = move || {
        pending
            .get()
            .map(|t| confirm_message(&t.profile.name, t.next))
            .unwrap_or_default()
    };
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Confirm Status Change"</h2>
                <p>{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "No"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        "Yes"
                    </button>
                </div>
            </div>
        </div>
    }
}
